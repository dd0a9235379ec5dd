//! CLI helpers shared by the per-day binaries.

mod stdout_logger;

use std::fmt;
use std::io::{self, Write};

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Options shared by every solver binary.
#[derive(Default)]
pub struct Opts {
    /// Output the report as JSON.
    json: bool,
    /// Enable debug logging.
    verbose: bool,
    /// Input path override.
    input: Option<String>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--json" => {
                    opts.json = true;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--input" => {
                    let path = it.next().context("missing argument to `--input`")?;
                    let path = path.to_str().context("non-utf8 argument to `--input`")?;
                    opts.input = Some(path.to_owned());
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set logger: {error}"))?;
        }

        Ok(opts)
    }

    /// The input path to read, `default` unless overridden with `--input`.
    pub fn input<'a>(&'a self, default: &'a str) -> &'a str {
        self.input.as_deref().unwrap_or(default)
    }
}

/// A solved puzzle, one labeled answer per part.
#[derive(Serialize)]
pub struct Report<'a> {
    day: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    label: &'a str,
    value: String,
}

impl<'a> Report<'a> {
    pub fn new(day: &'a str) -> Self {
        Self {
            day,
            parts: Vec::new(),
        }
    }

    /// Add a labeled answer to the report.
    pub fn part(mut self, label: &'a str, value: impl fmt::Display) -> Self {
        self.parts.push(Part {
            label,
            value: value.to_string(),
        });

        self
    }

    /// Write the report to stdout, as lines or as JSON per [`Opts`].
    pub fn print(&self, opts: &Opts) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if opts.json {
            serde_json::to_writer(&mut out, self)?;
            writeln!(out)?;
        } else {
            for part in &self.parts {
                writeln!(out, "{}: {}", part.label, part.value)?;
            }
        }

        Ok(())
    }
}
