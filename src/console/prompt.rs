use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{AppError, AppResult, PromptError};

/// Asks questions on `out` and reads trimmed answers, one line each.
pub struct Prompter<R> {
    reader: R,
}

impl<R> Prompter<R>
where
    R: AsyncBufRead + Unpin,
{
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Writes `prompt` without a newline and waits for one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error when the prompt cannot be written, reading fails, or
    /// the input is closed before a line arrives.
    pub async fn ask<W>(&mut self, out: &mut W, prompt: &str) -> AppResult<String>
    where
        W: Write,
    {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(|err| AppError::prompt(PromptError::ReadFailed { source: err }))?;
        if read == 0 {
            return Err(AppError::prompt(PromptError::InputClosed {
                prompt: prompt.trim().to_owned(),
            }));
        }
        Ok(line.trim().to_owned())
    }
}
