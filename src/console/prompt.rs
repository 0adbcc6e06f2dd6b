use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::trace;

use crate::console::ConsoleError;

const INVALID_PREFIX: &str = "Invalid input. ";

/// Line oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks once and returns the trimmed answer.
    pub fn read_text(&mut self, message: &str) -> Result<String, ConsoleError> {
        self.say(message)?;
        self.next_line()
    }

    /// Asks until the answer parses as `T`.
    pub fn read_parsed<T: FromStr>(&mut self, message: &str) -> Result<T, ConsoleError> {
        self.read_valid(message, |_: &T| true)
    }

    /// Asks until the answer parses as `T` and satisfies `accept`.
    pub fn read_valid<T, F>(&mut self, message: &str, accept: F) -> Result<T, ConsoleError>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        self.say(message)?;

        loop {
            let line = self.next_line()?;

            match line.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    trace!("Rejected console input [{line}]");
                    self.say(INVALID_PREFIX)?;
                    self.say(message)?;
                }
            }
        }
    }

    fn next_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }

        Ok(line.trim().to_string())
    }
}
