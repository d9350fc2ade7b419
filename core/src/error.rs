//! Validation errors and their construction from classifier output.

use thiserror::Error;

use crate::ArgSpec;

/// Error reported by an argument parser.
///
/// The message is passed through to the user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single argument validation failure.
///
/// The `Display` impl is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The parser rejected the command line.
    #[error(transparent)]
    Parser(#[from] ParseError),
    /// An argument has no value and no default.
    #[error("{name} is required")]
    Missing { name: String },
    /// A numeric argument has a non-numeric value.
    #[error("{name} must be a number")]
    NotANumber { name: String },
    /// A value does not match its validation pattern.
    #[error("{}", pattern_mismatch_message(.name, .message))]
    PatternMismatch {
        name: String,
        message: Option<String>,
    },
}

fn pattern_mismatch_message(name: &str, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("{name} must satisfy regular expression"),
    }
}

/// Builds a "required" error for each missing specification.
pub fn missing_errors(specs: &[&ArgSpec]) -> Vec<ValidationError> {
    specs
        .iter()
        .map(|spec| ValidationError::Missing {
            name: spec.name.clone(),
        })
        .collect()
}

/// Builds a "must be a number" error for each non-numeric specification.
pub fn not_numeric_errors(specs: &[&ArgSpec]) -> Vec<ValidationError> {
    specs
        .iter()
        .map(|spec| ValidationError::NotANumber {
            name: spec.name.clone(),
        })
        .collect()
}

/// Builds a pattern-mismatch error for each specification, carrying its
/// custom validation message when one is set.
pub fn not_pattern_matching_errors(specs: &[&ArgSpec]) -> Vec<ValidationError> {
    specs
        .iter()
        .map(|spec| ValidationError::PatternMismatch {
            name: spec.name.clone(),
            message: spec.validation_message.clone(),
        })
        .collect()
}
