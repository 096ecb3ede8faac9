//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but broke one or more rules
    #[error("Invalid configuration ({} violation(s))", .0.len())]
    Invalid(Vec<ConfigViolation>),
}

/// A single broken configuration rule
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("max_entry_length must be between 1 and {max} (got {value})")]
    EntryLengthOutOfRange { value: usize, max: usize },

    #[error("grouping and decimal separators must differ (both '{0}')")]
    SeparatorsCollide(char),

    #[error("separator '{0}' is reserved for digits or operators")]
    ReservedSeparator(char),

    #[error("error_marker must not be empty")]
    EmptyErrorMarker,

    #[error("max_visible_chars must be at least 1")]
    ZeroVisibleChars,
}
