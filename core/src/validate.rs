//! Specification set validation.
//!
//! Checks the structural invariants of a caller-supplied specification set
//! before it is used: names are non-empty and unique, aliases are unique and
//! usable after a single `-`, and nothing collides with the implicit help
//! flag.
//!
//! # Examples
//!
//! ```
//! use cli_args_core::*;
//!
//! let specs = [ArgSpec::new("input").with_alias('i'), ArgSpec::boolean("verbose")];
//! assert!(validate_specs(&specs).is_empty());
//!
//! // Invalid: the alias is taken twice
//! let bad = [ArgSpec::new("input").with_alias('i'), ArgSpec::new("include").with_alias('i')];
//! assert_eq!(validate_specs(&bad), vec![SpecError::DuplicateAlias('i')]);
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{ArgSpec, HELP_ALIAS, HELP_NAME};

/// Structural problems in a specification set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Name is empty or whitespace-only.
    #[error("argument name cannot be empty")]
    EmptyName,
    /// Name starts with `-` or contains whitespace.
    #[error("invalid argument name: {0}")]
    InvalidName(String),
    /// Two specifications share a name.
    #[error("duplicate argument name: {0}")]
    DuplicateName(String),
    /// Two specifications share an alias.
    #[error("duplicate argument alias: {0}")]
    DuplicateAlias(char),
    /// Alias is `-` or whitespace.
    #[error("invalid argument alias: {0:?}")]
    InvalidAlias(char),
    /// Name is reserved for the help flag.
    #[error("argument name is reserved: {0}")]
    ReservedName(String),
    /// Alias is reserved for the help flag.
    #[error("argument alias is reserved: {0}")]
    ReservedAlias(char),
}

/// Validates a specification set.
///
/// Returns at most one error, the first problem found.
pub fn validate_specs(specs: &[ArgSpec]) -> Vec<SpecError> {
    let mut errors = Vec::new();
    let mut names: HashSet<&str> = HashSet::new();
    let mut aliases: HashSet<char> = HashSet::new();

    for spec in specs {
        let name = spec.name.trim();
        if name.is_empty() {
            errors.push(SpecError::EmptyName);
            return errors;
        }
        if spec.name.starts_with('-') || spec.name.contains(char::is_whitespace) {
            errors.push(SpecError::InvalidName(spec.name.clone()));
            return errors;
        }
        if name == HELP_NAME {
            errors.push(SpecError::ReservedName(name.to_string()));
            return errors;
        }
        if !names.insert(name) {
            errors.push(SpecError::DuplicateName(name.to_string()));
            return errors;
        }

        if let Some(alias) = spec.alias {
            if alias == '-' || alias.is_whitespace() {
                errors.push(SpecError::InvalidAlias(alias));
                return errors;
            }
            if alias == HELP_ALIAS {
                errors.push(SpecError::ReservedAlias(alias));
                return errors;
            }
            if !aliases.insert(alias) {
                errors.push(SpecError::DuplicateAlias(alias));
                return errors;
            }
        }
    }

    errors
}
