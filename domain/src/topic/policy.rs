//! Topic policy — domain-level rules for question topics.
//!
//! [`TopicPolicy`] decides whether a topic string is admissible and how many
//! topics a [`Question`](crate::Question) may carry. A question keeps the
//! policy it was created under and checks every later topic against it.

use crate::core::error::{InvalidOperationError, Result};

/// Minimum topic length (in characters) used by [`TopicPolicy::default`].
pub const DEFAULT_MIN_TOPIC_LENGTH: usize = 3;

/// Maximum number of topics a single question may carry.
pub const MAX_TOPICS_PER_QUESTION: usize = 5;

/// Topic admissibility rules (Value Object).
///
/// # Example
///
/// ```
/// use quiz_domain::TopicPolicy;
///
/// let policy = TopicPolicy::default();
/// assert!(policy.is_valid("Harry Potter Trivia"));
/// assert!(!policy.is_valid("HP"));
/// assert_eq!(policy.max_topics(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicPolicy {
    min_length: usize,
}

impl Default for TopicPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_TOPIC_LENGTH,
        }
    }
}

impl TopicPolicy {
    /// Create a policy with a custom minimum topic length.
    ///
    /// A minimum of zero would admit the empty topic and is rejected.
    pub fn new(min_length: usize) -> Result<Self> {
        if min_length == 0 {
            return Err(InvalidOperationError::InvalidPolicy { min_length });
        }
        Ok(Self { min_length })
    }

    /// Minimum number of characters a topic must have.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum number of topics per question. Not configurable.
    pub fn max_topics(&self) -> usize {
        MAX_TOPICS_PER_QUESTION
    }

    /// Whether `topic` is long enough. Length counts characters, not bytes.
    pub fn is_valid(&self, topic: &str) -> bool {
        topic.chars().count() >= self.min_length
    }

    /// Like [`is_valid`](Self::is_valid), but reports the violation.
    pub fn check(&self, topic: &str) -> Result<()> {
        if self.is_valid(topic) {
            Ok(())
        } else {
            Err(InvalidOperationError::InvalidTopic {
                topic: topic.to_string(),
                min_length: self.min_length,
            })
        }
    }
}
