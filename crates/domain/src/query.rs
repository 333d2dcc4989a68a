//! Query — a tagged action received from a caller, plus the question and
//! answer values it carries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Wire name of the question-answering action.
pub const ASK_ACTION: &str = "ask";

/// A free-text question for the knowledge base.
///
/// An absent question is represented by the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question(String);

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text produced by the knowledge base in reply to a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(String);

impl Answer {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the answer and return the inner text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.0
    }
}

/// A validated query, dispatched on its `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Ask the knowledge base a question.
    Ask(Question),
}

impl Query {
    /// Build a query from the loosely typed fields of a request body.
    ///
    /// A missing `text` becomes an empty [`Question`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownAction`] when `action` is missing
    /// or is not a known action name.
    pub fn parse(action: Option<&str>, text: Option<String>) -> Result<Self, ValidationError> {
        match action {
            Some(ASK_ACTION) => Ok(Self::Ask(Question::new(text.unwrap_or_default()))),
            _ => Err(ValidationError::UnknownAction),
        }
    }
}
