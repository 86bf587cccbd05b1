//! Infrastructure layer for quiz-question
//!
//! This crate contains the adapters around the domain layer, currently
//! configuration file loading.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileTopicsConfig,
};
