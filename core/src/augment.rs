//! Specification augmentation.
//!
//! Every specification set handed to the parser is first augmented: the
//! implicit `help` flag is prepended and each description is suffixed with
//! the argument's default value, so usage output documents it.

use crate::ArgSpec;

/// Prepends the help flag to `specs`.
///
/// # Examples
///
/// ```
/// use cli_args_core::{ArgSpec, add_help};
///
/// let specs = add_help(&[ArgSpec::new("input")]);
/// assert_eq!(specs.len(), 2);
/// assert!(specs[0].is_help());
/// assert_eq!(specs[1].name, "input");
/// ```
pub fn add_help(specs: &[ArgSpec]) -> Vec<ArgSpec> {
    std::iter::once(ArgSpec::help())
        .chain(specs.iter().cloned())
        .collect()
}

/// Appends `" (default <value>)"` to the description of every specification
/// that has a default value.
///
/// # Examples
///
/// ```
/// use cli_args_core::{ArgSpec, apply_default_value_help};
///
/// let specs = apply_default_value_help(&[
///     ArgSpec::number("port").with_description("Port").with_default(80.0),
///     ArgSpec::new("host").with_description("Host"),
/// ]);
/// assert_eq!(specs[0].description.as_deref(), Some("Port (default 80)"));
/// assert_eq!(specs[1].description.as_deref(), Some("Host"));
/// ```
pub fn apply_default_value_help(specs: &[ArgSpec]) -> Vec<ArgSpec> {
    specs
        .iter()
        .map(|spec| match &spec.default_value {
            Some(value) => {
                let hint = format!("(default {value})");
                let description = match spec.description.as_deref() {
                    Some(desc) if !desc.is_empty() => format!("{desc} {hint}"),
                    _ => hint,
                };
                ArgSpec {
                    description: Some(description),
                    ..spec.clone()
                }
            }
            None => spec.clone(),
        })
        .collect()
}

/// Builds the augmented specification set used for one invocation.
pub fn augment(specs: &[ArgSpec]) -> Vec<ArgSpec> {
    apply_default_value_help(&add_help(specs))
}
