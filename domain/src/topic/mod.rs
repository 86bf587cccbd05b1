//! Topic rules
//!
//! - [`policy::TopicPolicy`] — admissibility and capacity of question topics

pub mod policy;

pub use policy::{DEFAULT_MIN_TOPIC_LENGTH, MAX_TOPICS_PER_QUESTION, TopicPolicy};
