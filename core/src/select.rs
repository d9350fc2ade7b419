//! Error selection.
//!
//! Only one error is reported per invocation. Sources are consulted in a
//! fixed priority order and the first error of the first non-empty source
//! wins:
//!
//! 1. the parser's own error,
//! 2. numeric-type violations,
//! 3. pattern mismatches,
//! 4. missing arguments.

use crate::{
    ArgSpec, ParseError, ParsedArgs, ValidationError, missing_args, missing_errors,
    non_numeric_args, non_pattern_matching_args, not_numeric_errors, not_pattern_matching_errors,
};

/// Returns the head of each source, skipping empty sources.
fn first_errors(sources: Vec<Vec<ValidationError>>) -> Vec<ValidationError> {
    sources
        .into_iter()
        .filter_map(|source| source.into_iter().next())
        .collect()
}

/// Picks the highest-priority error for a parse result.
///
/// # Examples
///
/// ```
/// use cli_args_core::{ArgSpec, ParsedArgs, get_error};
///
/// let specs = [ArgSpec::number("count"), ArgSpec::new("name")];
/// let parsed: ParsedArgs = [("count", "many")].into_iter().collect();
///
/// let err = get_error(None, &parsed, &specs).unwrap();
/// assert_eq!(err.to_string(), "count must be a number");
/// ```
pub fn get_error(
    parser_error: Option<ParseError>,
    parsed: &ParsedArgs,
    specs: &[ArgSpec],
) -> Option<ValidationError> {
    first_errors(vec![
        parser_error.map(ValidationError::from).into_iter().collect(),
        not_numeric_errors(&non_numeric_args(parsed, specs)),
        not_pattern_matching_errors(&non_pattern_matching_args(parsed, specs)),
        missing_errors(&missing_args(parsed, specs)),
    ])
    .into_iter()
    .next()
}
