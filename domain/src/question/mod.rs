//! Question aggregate and its construction rules
//!
//! - [`entities::Question`] — a multiple-choice question with topics and a weight

pub mod entities;

#[cfg(test)]
mod properties;

pub use entities::{CHOICE_COUNT_RANGE, Question, WEIGHT_RANGE};
