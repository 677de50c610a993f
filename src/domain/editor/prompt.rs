//! Prompter abstraction between the editor and its operator

use std::collections::VecDeque;

use crate::domain::DomainError;

/// Line-based request/response channel used by the editor.
///
/// `prompt` returns `Ok(None)` once the input side is closed.
pub trait Prompter {
    fn prompt(&mut self, message: &str) -> Result<Option<String>, DomainError>;

    fn show(&mut self, line: &str);

    fn error(&mut self, message: &str);
}

/// Replays a fixed list of answers and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
    output: Vec<String>,
    errors: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Answers not consumed by the session
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> Result<Option<String>, DomainError> {
        self.output.push(message.to_string());
        Ok(self.inputs.pop_front())
    }

    fn show(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
