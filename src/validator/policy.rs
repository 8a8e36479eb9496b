//! What the user sees when a field fails.

use serde::{Deserialize, Serialize};

/// Error reporting policy for one validation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Show this message on any failure.
    Message(String),
    /// Record the error state but paint nothing. Used for checks that only
    /// drive recovery or downstream logic. A message already shown from an
    /// earlier failure stays shown and stays recorded.
    Silent,
}

impl ErrorPolicy {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::Silent => None,
        }
    }
}
