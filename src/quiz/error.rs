//! Error types for the quiz core

use thiserror::Error;

/// Errors raised by a quiz session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The bank cannot supply a full level
    #[error("Question bank has {available} questions but a level needs {requested}")]
    InsufficientQuestions {
        /// Questions per level
        requested: usize,
        /// Questions in the bank
        available: usize,
    },

    /// Settings that cannot drive a session
    #[error("Invalid quiz settings: {0}")]
    InvalidSettings(String),
}

/// Errors raised while loading a question bank
#[derive(Debug, Error)]
pub enum BankError {
    /// Bank file could not be read
    #[error("Failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    /// Bank file is not valid JSON for the bank schema
    #[error("Failed to parse question bank: {0}")]
    Json(#[from] serde_json::Error),

    /// A question breaks the authoring rules for its modality
    #[error("Question '{id}' is invalid: {reason}")]
    InvalidQuestion {
        /// Offending question id
        id: String,
        /// What rule was broken
        reason: String,
    },

    /// Two questions share an id
    #[error("Duplicate question id '{0}'")]
    DuplicateId(String),

    /// The bank has no questions at all
    #[error("Question bank is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_questions_message_names_both_counts() {
        let err = QuizError::InsufficientQuestions { requested: 10, available: 4 };
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BankError = json_err.into();
        assert!(matches!(err, BankError::Json(_)));
    }
}
