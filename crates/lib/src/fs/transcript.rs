//! Splitting a transcript into command blocks.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while scanning transcript lines.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("{line}: not a recognized command: `{text}`")]
    BadCommand { line: usize, text: String },
    #[error("{line}: output before any command")]
    OutputBeforeCommand { line: usize },
    #[error("{line}: bad listing entry: `{text}`")]
    BadEntry { line: usize, text: String },
    #[error("{line}: bad file size in `{text}`")]
    BadSize {
        line: usize,
        text: String,
        #[source]
        error: ParseIntError,
    },
}

/// A command found at the start of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `cd /`
    Root,
    /// `cd ..`
    Up,
    /// `cd <name>`
    Enter(&'a str),
    /// `ls`
    List,
}

/// One entry from the output of `ls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEntry<'a> {
    /// `dir <name>`
    Dir(&'a str),
    /// `<size> <name>`
    File { name: &'a str, size: u64 },
}

/// One command line plus the output lines that followed it.
#[derive(Debug)]
pub struct Block<'a> {
    /// 1-based line number of the command line.
    pub line: usize,
    pub command: Command<'a>,
    /// Parsed `ls` output. Empty for `cd` commands.
    pub entries: Vec<ListEntry<'a>>,
}

/// Split a sequence of trimmed lines into command blocks.
///
/// A new block starts exactly at each line beginning with `$`, the final
/// block runs to the end of input. Blank lines carry nothing and are
/// skipped. Empty input yields no blocks at all.
pub fn blocks<'a, I>(lines: I) -> Blocks<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    Blocks {
        lines,
        n: 0,
        lookahead: None,
        failed: false,
    }
}

/// Iterator over the blocks of a transcript.
pub struct Blocks<'a, I> {
    lines: I,
    n: usize,
    lookahead: Option<(usize, &'a str)>,
    failed: bool,
}

impl<'a, I> Blocks<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    fn pull(&mut self) -> Option<(usize, &'a str)> {
        if let Some(line) = self.lookahead.take() {
            return Some(line);
        }

        loop {
            let line = self.lines.next()?;
            self.n += 1;

            if !line.is_empty() {
                return Some((self.n, line));
            }
        }
    }
}

impl<'a, I> Iterator for Blocks<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = Result<Block<'a>, TranscriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (line, text) = self.pull()?;

        let Some(rest) = text.strip_prefix('$') else {
            self.failed = true;
            return Some(Err(TranscriptError::OutputBeforeCommand { line }));
        };

        let mut output = Vec::new();

        while let Some((n, text)) = self.pull() {
            if text.starts_with('$') {
                self.lookahead = Some((n, text));
                break;
            }

            output.push((n, text));
        }

        let result = parse_block(line, rest.trim_start(), output);

        if result.is_err() {
            self.failed = true;
        }

        Some(result)
    }
}

fn parse_block<'a>(
    line: usize,
    text: &'a str,
    output: Vec<(usize, &'a str)>,
) -> Result<Block<'a>, TranscriptError> {
    let command = parse_command(line, text)?;

    let entries = if matches!(command, Command::List) {
        let mut entries = Vec::with_capacity(output.len());

        for (n, text) in output {
            entries.push(parse_entry(n, text)?);
        }

        entries
    } else {
        if !output.is_empty() {
            log::warn!("{line}: ignoring {} output line(s) after `cd`", output.len());
        }

        Vec::new()
    };

    Ok(Block {
        line,
        command,
        entries,
    })
}

fn parse_command(line: usize, text: &str) -> Result<Command<'_>, TranscriptError> {
    if text == "ls" {
        return Ok(Command::List);
    }

    if let Some(target) = text.strip_prefix("cd ") {
        return Ok(match target {
            "/" => Command::Root,
            ".." => Command::Up,
            name => Command::Enter(name),
        });
    }

    Err(TranscriptError::BadCommand {
        line,
        text: text.to_string(),
    })
}

fn parse_entry(line: usize, text: &str) -> Result<ListEntry<'_>, TranscriptError> {
    let Some((prefix, name)) = text.split_once(' ') else {
        return Err(TranscriptError::BadEntry {
            line,
            text: text.to_string(),
        });
    };

    if prefix == "dir" {
        return Ok(ListEntry::Dir(name));
    }

    let size = prefix.parse().map_err(|error| TranscriptError::BadSize {
        line,
        text: text.to_string(),
        error,
    })?;

    Ok(ListEntry::File { name, size })
}
