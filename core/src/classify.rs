//! Classifiers for parsed arguments.
//!
//! Each classifier returns the specifications that violate one rule, in
//! specification order. An absent value fails the numeric and pattern
//! rules as well as [`missing_args`]; the selector decides which is reported.

use crate::{ArgSpec, ParsedArgs, ValueKind};

/// Returns the specifications whose argument has no value.
///
/// The help flag is never reported.
pub fn missing_args<'a>(parsed: &ParsedArgs, specs: &'a [ArgSpec]) -> Vec<&'a ArgSpec> {
    specs
        .iter()
        .filter(|spec| !parsed.contains(&spec.name))
        .filter(|spec| !spec.is_help())
        .collect()
}

/// Returns `true` when `text` starts with a base-10 integer.
///
/// Leading whitespace and a single sign are skipped; anything after the
/// first run of digits is ignored, so `"5abc"` counts as numeric.
///
/// # Examples
///
/// ```
/// use cli_args_core::is_numeric;
///
/// assert!(is_numeric("12"));
/// assert!(is_numeric("  -3px"));
/// assert!(!is_numeric("junk"));
/// assert!(!is_numeric(""));
/// ```
pub fn is_numeric(text: &str) -> bool {
    let trimmed = text.trim_start();
    let unsigned = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    unsigned.starts_with(|c: char| c.is_ascii_digit())
}

/// Returns the numeric specifications whose value is absent or not numeric.
pub fn non_numeric_args<'a>(parsed: &ParsedArgs, specs: &'a [ArgSpec]) -> Vec<&'a ArgSpec> {
    specs
        .iter()
        .filter(|spec| spec.kind == ValueKind::Number)
        .filter(|spec| {
            parsed
                .get(&spec.name)
                .is_none_or(|value| !is_numeric(&value.to_string()))
        })
        .collect()
}

/// Returns the specifications whose value is absent or does not match their
/// validation pattern.
pub fn non_pattern_matching_args<'a>(
    parsed: &ParsedArgs,
    specs: &'a [ArgSpec],
) -> Vec<&'a ArgSpec> {
    specs
        .iter()
        .filter(|spec| match (&spec.validation_pattern, parsed.get(&spec.name)) {
            (Some(pattern), Some(value)) => !pattern.is_match(&value.to_string()),
            (Some(_), None) => true,
            (None, _) => false,
        })
        .collect()
}
