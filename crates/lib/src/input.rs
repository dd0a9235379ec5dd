//! Input loading and line splitting.

use std::path::Path;

use anyhow::{Context, Result};

/// A loaded puzzle input.
pub struct Input {
    data: String,
}

impl Input {
    /// Read the input at the given path into memory.
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
        Ok(Self { data })
    }

    /// Iterate over input lines with trailing whitespace stripped.
    pub fn lines(&self) -> Lines<'_> {
        Lines { data: &self.data }
    }
}

/// Iterator over trimmed input lines.
pub struct Lines<'a> {
    data: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.data.is_empty() {
            return None;
        }

        let (line, rest) = match memchr::memchr(b'\n', self.data.as_bytes()) {
            Some(at) => (&self.data[..at], &self.data[at + 1..]),
            None => (self.data, ""),
        };

        self.data = rest;
        Some(line.trim_end())
    }
}
