/// Structured error types for dockside-quiz.
///
/// Scoring never fails; these only cover loading a question bank and running
/// the HTTP listener.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::question::QuestionId;

/// Error raised while loading or validating a question bank
#[derive(Error, Debug)]
pub enum QuizError {
    /// Bank file could not be read
    #[error("failed to read question bank {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bank file is not valid TOML or has the wrong shape
    #[error("invalid question bank TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Bank could not be written as TOML
    #[error("failed to serialize question bank: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Bank contains no questions
    #[error("question bank is empty")]
    EmptyBank,

    /// Two questions share an identifier
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    /// Question does not have exactly four options
    #[error("question {id} has {found} options, expected {expected}")]
    OptionCount {
        id: QuestionId,
        found: usize,
        expected: usize,
    },

    /// Correct-answer index points past the option list
    #[error("question {id} answer index {answer} is out of range")]
    AnswerOutOfRange { id: QuestionId, answer: usize },
}

/// Result type alias for question bank operations
pub type Result<T> = std::result::Result<T, QuizError>;

impl QuizError {
    /// Create an I/O error for the given bank path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
