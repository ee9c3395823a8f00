//! Error types
//!
//! Gameplay actions never fail; only loading data and initializing a level
//! can surface an error.

use thiserror::Error;

/// Problems with the question/level content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Content store has no levels")]
    NoLevels,

    #[error("Level {level} has no questions")]
    EmptyLevel { level: usize },

    #[error("Level {level} has {found} questions, at least {required} are needed to finish it")]
    TooFewQuestions {
        level: usize,
        found: usize,
        required: u32,
    },

    #[error("Level {level} question {question} has no options")]
    NoOptions { level: usize, question: usize },

    #[error(
        "Level {level} question {question} marks option {correct} correct but only has {options} options"
    )]
    CorrectAnswerOutOfRange {
        level: usize,
        question: usize,
        correct: usize,
        options: usize,
    },

    #[error("Level {level} out of range ({available} levels available)")]
    LevelOutOfRange { level: usize, available: usize },

    #[error("Level {level} has no question {question}")]
    MissingQuestion { level: usize, question: usize },
}

/// Problems with balance configuration
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Content and tuning that disagree or are invalid on their own
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Tuning(#[from] TuningError),
}

pub type Result<T> = std::result::Result<T, ContentError>;
