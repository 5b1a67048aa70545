//! Line-oriented console I/O.
//!
//! All prompting goes through [`Console`], which is generic over its input and
//! output so the flows can be driven from in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// A prompt-and-read console.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over arbitrary input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `message` without a newline and reads one trimmed line.
    ///
    /// End of input reads as a blank line.
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt
            writeln!(self.output)?;
        }
        Ok(line.trim().to_string())
    }

    /// Output sink for regular messages.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Borrows the output sink, e.g. to inspect a captured transcript.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
