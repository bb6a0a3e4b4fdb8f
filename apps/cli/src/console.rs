//! # Console
//!
//! Line-oriented prompt/print over any reader and writer, so the shell runs
//! the same against a terminal and against scripted input in tests.

use std::io::{BufRead, Write};

use crate::error::ShellResult;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints `text` without a newline and reads one line.
    ///
    /// Returns `None` at end of input. The line terminator is stripped;
    /// other whitespace is left for the caller to judge.
    pub fn prompt(&mut self, text: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(|c: char| c == '\r' || c == '\n').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prints one line.
    pub fn say(&mut self, text: &str) -> ShellResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints each line in order.
    pub fn say_all<I, S>(&mut self, lines: I) -> ShellResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.say(line.as_ref())?;
        }
        Ok(())
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
