//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types on demand.

use quiz_domain::{InvalidOperationError, TopicPolicy, topic::DEFAULT_MIN_TOPIC_LENGTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("topics.min_length is invalid: {0}")]
    InvalidTopicPolicy(#[source] InvalidOperationError),

    #[error("logging.level cannot be empty")]
    EmptyLogLevel,
}

/// Raw topic configuration from TOML
///
/// # Example
///
/// ```toml
/// [topics]
/// min_length = 3
/// ```
///
/// The per-question topic cap is fixed and not read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTopicsConfig {
    /// Minimum topic length in characters
    pub min_length: usize,
}

impl Default for FileTopicsConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_TOPIC_LENGTH,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// `tracing` filter directive used when no `-v` flag is given
    pub level: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Topic policy settings
    pub topics: FileTopicsConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.to_topic_policy()?;

        if let Some(level) = &self.logging.level {
            if level.trim().is_empty() {
                return Err(ConfigValidationError::EmptyLogLevel);
            }
        }

        Ok(())
    }

    /// Build the domain topic policy described by `[topics]`.
    pub fn to_topic_policy(&self) -> Result<TopicPolicy, ConfigValidationError> {
        TopicPolicy::new(self.topics.min_length).map_err(ConfigValidationError::InvalidTopicPolicy)
    }
}
