//! Terminal prompter reading answers from a line-based input

use std::io::{self, BufRead, Write};

use crate::domain::{DomainError, Prompter};

/// Prompter over any buffered reader and writer; stdin/stdout by default
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn prompt(&mut self, message: &str) -> Result<Option<String>, DomainError> {
        write!(self.output, "{}", message)
            .and_then(|_| self.output.flush())
            .map_err(|e| DomainError::input(format!("Failed to write prompt: {}", e)))?;

        // Undecodable bytes become U+FFFD and fail validation like any typo
        let mut buffer = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buffer)
            .map_err(|e| DomainError::input(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            // Keep the next output off the prompt line
            let _ = writeln!(self.output);
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buffer);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, line: &str) {
        let _ = writeln!(self.output, "{}", line);
    }

    fn error(&mut self, message: &str) {
        let _ = writeln!(self.output, "Error: {}", message);
    }
}
