//! # Console
//!
//! Line-oriented prompt I/O.
//!
//! Generic over `BufRead` / `Write` so the whole menu loop can run against
//! a `Cursor` and a `Vec<u8>` in tests, and against locked stdin/stdout in
//! the binary.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::AppResult;

/// A prompt-and-answer console.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input source and an output sink.
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `label` (no newline), then reads one line.
    ///
    /// ## Returns
    /// - `Ok(Some(line))` with the line terminator stripped
    /// - `Ok(None)` once input is exhausted
    pub fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without prompting.
    pub fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Consumes the console and hands back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
