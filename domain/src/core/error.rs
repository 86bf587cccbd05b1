//! Domain error types

use thiserror::Error;

/// Raised whenever an operation would break a [`Question`](crate::Question)
/// or [`TopicPolicy`](crate::TopicPolicy) invariant.
///
/// Every variant renders as one short sentence naming the violated rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOperationError {
    #[error("Question body must not be empty")]
    EmptyBody,

    #[error("A question must have between 2 and 8 choices, got {count}")]
    ChoiceCountOutOfRange { count: usize },

    #[error("Correct choice {index} is out of range for {count} choices")]
    CorrectChoiceOutOfRange { index: usize, count: usize },

    #[error("Topic '{topic}' must be at least {min_length} characters long")]
    InvalidTopic { topic: String, min_length: usize },

    #[error("Topic already exists: {0}")]
    DuplicateTopic(String),

    #[error("A question cannot have more than {max} topics")]
    TopicLimitReached { max: usize },

    #[error("Topic does not exist: {0}")]
    UnknownTopic(String),

    #[error("Cannot remove '{0}', a question needs at least one topic")]
    LastTopic(String),

    #[error("Weight must be between 1 and 15, inclusive, got {0}")]
    WeightOutOfRange(u32),

    #[error("Topic policy minimum length must be at least 1, got {min_length}")]
    InvalidPolicy { min_length: usize },
}

impl InvalidOperationError {
    /// Short machine-friendly name of the violated rule, used in log events.
    pub fn rule(&self) -> &'static str {
        match self {
            InvalidOperationError::EmptyBody => "empty_body",
            InvalidOperationError::ChoiceCountOutOfRange { .. } => "choice_count",
            InvalidOperationError::CorrectChoiceOutOfRange { .. } => "correct_choice",
            InvalidOperationError::InvalidTopic { .. } => "topic_length",
            InvalidOperationError::DuplicateTopic(_) => "duplicate_topic",
            InvalidOperationError::TopicLimitReached { .. } => "topic_limit",
            InvalidOperationError::UnknownTopic(_) => "unknown_topic",
            InvalidOperationError::LastTopic(_) => "last_topic",
            InvalidOperationError::WeightOutOfRange(_) => "weight_range",
            InvalidOperationError::InvalidPolicy { .. } => "policy_min_length",
        }
    }
}

/// Result alias for domain operations.
pub type Result<T> = std::result::Result<T, InvalidOperationError>;
