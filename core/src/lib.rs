//! Argument specifications and the validation pipeline behind them.
//!
//! This crate models the arguments a command accepts and decides whether a
//! parsed command line is acceptable:
//!
//! - [`ArgSpec`] — one accepted argument (name, alias, value kind, default,
//!   description, validation pattern).
//! - [`ParsedArgs`] — the values a parser produced, keyed by name.
//! - Classifiers ([`missing_args`], [`non_numeric_args`],
//!   [`non_pattern_matching_args`]) isolate the specifications failing one
//!   rule each.
//! - [`get_error`] picks the single error to report, by priority.
//! - [`get`] ties it together around a caller-supplied [`ArgParser`],
//!   [`UsageRenderer`], [`Logger`] and [`OutputSink`].
//!
//! Structural checks on a specification set ([`validate_specs`]) catch empty,
//! unusable or duplicate names and aliases before a set is used.
//!
//! # Example
//!
//! ```
//! use cli_args_core::*;
//!
//! let specs = [
//!     ArgSpec::number("port").with_alias('p'),
//!     ArgSpec::new("env").with_pattern("^(dev|prod)$").unwrap(),
//! ];
//! let specs = augment(&specs);
//! assert_eq!(specs.len(), 3);
//!
//! let parsed: ParsedArgs = [("port", "80"), ("env", "qa")].into_iter().collect();
//! let err = get_error(None, &parsed, &specs).unwrap();
//! assert_eq!(err.to_string(), "env must satisfy regular expression");
//! ```

mod augment;
mod classify;
mod error;
mod orchestrate;
mod select;
mod types;
mod usage;
mod validate;

pub use augment::{add_help, apply_default_value_help, augment};
pub use classify::{is_numeric, missing_args, non_numeric_args, non_pattern_matching_args};
pub use error::{
    ParseError, ValidationError, missing_errors, not_numeric_errors, not_pattern_matching_errors,
};
pub use orchestrate::{
    ArgParser, Logger, OutputSink, UsageRenderer, get, parse_args, show_error_and_or_help,
};
pub use select::get_error;
pub use types::*;
pub use usage::{OPTIONS_HEADER, UsageSection, usage_sections};
pub use validate::{SpecError, validate_specs};
