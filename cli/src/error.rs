//! Error types for specification loading and output.
//!
//! Validation failures of a command line are not errors here; they are
//! reported through the usage path and surface as `None` from
//! [`get`](crate::get).

use cli_args_core::SpecError;
use thiserror::Error;

/// Errors that can occur while loading or writing specification files.
#[derive(Debug, Error)]
pub enum CliArgsError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The specification set breaks a structural rule.
    #[error("invalid specification: {0}")]
    InvalidSpec(#[from] SpecError),

    /// File extension is neither JSON nor YAML.
    #[error("unsupported specification format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience alias for results with [`CliArgsError`].
pub type Result<T> = std::result::Result<T, CliArgsError>;
