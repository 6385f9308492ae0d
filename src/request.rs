//! Input requests issued by the build engine
//!
//! An [`InputRequest`] describes what to ask the user and carries the slot the
//! answer is written into. Requests can also be read as newline-delimited JSON
//! so that a build engine can drive the provider as an external process.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::io::BufRead;

/// A single request for interactive input.
///
/// The multiple-choice variant is a request whose `choices` is `Some`, even
/// when the list itself is empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRequest {
    prompt: String,
    #[serde(default, alias = "default_value", alias = "defaultValue")]
    default: String,
    #[serde(default)]
    choices: Option<Vec<String>>,
    #[serde(skip)]
    input: Option<String>,
    #[serde(skip)]
    answered: bool,
}

impl InputRequest {
    /// Creates a free-text request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: String::new(),
            choices: None,
            input: None,
            answered: false,
        }
    }

    /// Creates a multiple-choice request.
    pub fn multiple_choice(prompt: impl Into<String>, choices: Vec<String>) -> Self {
        Self { choices: Some(choices), ..Self::new(prompt) }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Choices of a multiple-choice request, `None` for a free-text one.
    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    /// The answer, if the request was answered with a value.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Fills the result slot. `None` records a cancelled request.
    ///
    /// # Errors
    /// Returns [`Error::InputAlreadySet`] if the slot has been filled before.
    pub fn set_input(&mut self, input: Option<String>) -> Result<()> {
        if self.answered {
            return Err(Error::InputAlreadySet { prompt: self.prompt.clone() });
        }
        self.input = input;
        self.answered = true;
        Ok(())
    }
}

/// Reads newline-delimited JSON requests one at a time.
///
/// Blank lines are skipped. Each item is parsed only when requested so that
/// an engine can write the next request after reading the previous answer.
pub struct RequestReader<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> RequestReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }
}

impl<R: BufRead> Iterator for RequestReader<R> {
    type Item = Result<InputRequest>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = String::new();
        loop {
            buf.clear();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let trimmed = buf.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    return Some(
                        serde_json::from_str(trimmed)
                            .map_err(|e| Error::RequestParseError { line: self.line, e }),
                    );
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
