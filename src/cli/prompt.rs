//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use super::CliError;

/// Reads answers from `input` after writing questions to `output`.
pub(super) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(super) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for narration between prompts.
    pub(super) fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask for a line of text. `None` means the input is exhausted.
    pub(super) fn line(&mut self, question: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask until the answer parses. `None` means the input is exhausted.
    pub(super) fn parsed<T: FromStr>(&mut self, question: &str) -> Result<Option<T>, CliError> {
        loop {
            let Some(answer) = self.line(question)? else {
                return Ok(None);
            };
            match answer.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input, try again.")?,
            }
        }
    }
}
