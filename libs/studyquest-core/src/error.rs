//! Error types for studyquest-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the scheduling, scoring and progression operations.
///
/// Every operation validates its input before computing anything, so an
/// error always means the inputs were left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// The precondition that was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("difficulty must be between 1 and 5, got {0}")]
    Difficulty(i64),

    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("xp delta must be non-negative, got {0}")]
    NegativeXp(i64),

    #[error("settings: {0}")]
    Settings(String),
}

/// Errors that can occur while validating AI-generated content.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected between {min} and {max} questions, got {count}")]
    QuestionCount { min: usize, max: usize, count: usize },

    #[error("question {index} has {count} options, expected {expected}")]
    OptionCount {
        index: usize,
        count: usize,
        expected: usize,
    },

    #[error("question {index} marks option {value} as correct")]
    AnswerOutOfRange { index: usize, value: i64 },

    #[error("empty field: {0}")]
    EmptyField(String),

    #[error("xp reward out of range: {0}")]
    InvalidReward(i64),

    #[error("no flashcards in payload")]
    NoFlashcards,

    #[error("flashcard {index} has difficulty {value}, expected 1-5")]
    FlashcardDifficulty { index: usize, value: i64 },
}

/// Errors from parsing unlock rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardError {
    #[error("unknown unlock requirement: {0}")]
    UnknownRequirement(String),
}
