//! Rebuild a device filesystem from a terminal transcript and size its
//! directories.
//!
//! The transcript is a flat log of `$ cd` and `$ ls` commands. Replaying it
//! against a single "current directory" cursor reconstructs the directory
//! tree, after which sizes are aggregated on demand.

mod query;
mod transcript;
mod tree;

#[cfg(test)]
mod tests;

use thiserror::Error;

pub use self::query::{smallest_deletion, sum_of_small_dirs, QueryError};
pub use self::transcript::{blocks, Block, Blocks, Command, ListEntry, TranscriptError};
pub use self::tree::{FileEntry, Fs, NodeId, Walk};

/// Errors raised while replaying a transcript.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    #[error("{line}: `cd ..` at the root")]
    AboveRoot { line: usize },
}

/// Replay a transcript into a directory tree.
///
/// An empty transcript yields a bare root of size 0. The returned arena owns
/// every node and is immutable from here on, queries only take `&Fs`.
pub fn build<'a, I>(lines: I) -> Result<Fs, BuildError>
where
    I: Iterator<Item = &'a str>,
{
    let mut fs = Fs::new();
    let mut cursor = fs.root();

    for block in transcript::blocks(lines) {
        let block = block?;

        match block.command {
            Command::Root => {
                while let Some(parent) = fs.parent(cursor) {
                    cursor = parent;
                }
            }
            Command::Up => {
                cursor = fs
                    .parent(cursor)
                    .ok_or(BuildError::AboveRoot { line: block.line })?;
            }
            Command::Enter(name) => {
                cursor = fs.ensure_child(cursor, name);
                log::debug!("cd {name} -> {}", fs.path(cursor));
            }
            Command::List => {
                let mut files: Vec<FileEntry> = Vec::new();

                for entry in &block.entries {
                    match *entry {
                        // Subdirectories union idempotently, a later listing
                        // never removes or duplicates a child.
                        ListEntry::Dir(name) => {
                            fs.ensure_child(cursor, name);
                        }
                        ListEntry::File { name, size } => {
                            match files.iter_mut().find(|f| f.name == name) {
                                Some(f) => f.size = size,
                                None => files.push(FileEntry {
                                    name: name.to_owned(),
                                    size,
                                }),
                            }
                        }
                    }
                }

                // A listing fully defines the files directly present, so the
                // previous set is replaced outright rather than merged.
                fs.set_files(cursor, files);
            }
        }
    }

    Ok(fs)
}
