//! Domain layer for quiz-question
//!
//! This crate contains the question aggregate, the topic policy it enforces,
//! and the error raised on every contract violation. It has no dependencies
//! on configuration, I/O or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: prompt, 2 to 8 choices, the index of the correct choice,
//!   1 to 5 unique topics and a weight in 1..=15
//! - **TopicPolicy**: minimum topic length and the per-question topic cap
//! - **Grade**: the weight for the correct choice, zero for anything else

pub mod core;
pub mod question;
pub mod topic;


// Re-export commonly used types
pub use crate::core::error::{InvalidOperationError, Result};
pub use question::Question;
pub use topic::{MAX_TOPICS_PER_QUESTION, TopicPolicy};
