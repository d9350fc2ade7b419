//! Argument specification types.
//!
//! This module defines the data model shared by every stage of the
//! validation pipeline: the declarative [`ArgSpec`] describing one accepted
//! argument, the [`ArgValue`] a parser produces for it, and the
//! [`ParsedArgs`] mapping handed from the parser to the classifiers. The types
//! derive [`serde`] traits so specification sets can be kept in JSON or YAML
//! files.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of the implicit help argument added to every specification set.
pub const HELP_NAME: &str = "help";

/// Alias of the implicit help argument.
pub const HELP_ALIAS: char = '?';

/// Value coercion applied by the parser to an argument.
///
/// # Examples
///
/// ```
/// use cli_args_core::ValueKind;
///
/// assert_eq!(ValueKind::default(), ValueKind::String);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Flag without a value; present means `true`.
    Boolean,
    /// Numeric value.
    Number,
    /// Free-form text (the default).
    #[default]
    String,
}

impl ValueKind {
    /// Short label used in usage output (`None` for flags).
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Boolean => None,
            Self::Number => Some("number"),
            Self::String => Some("string"),
        }
    }
}

/// A coerced argument value.
///
/// `Display` gives the value's plain string form, which is what the numeric
/// and pattern rules inspect.
///
/// # Examples
///
/// ```
/// use cli_args_core::ArgValue;
///
/// assert_eq!(ArgValue::Number(5.0).to_string(), "5");
/// assert_eq!(ArgValue::Number(2.5).to_string(), "2.5");
/// assert_eq!(ArgValue::Bool(false).to_string(), "false");
/// assert_eq!(ArgValue::from("info").to_string(), "info");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ArgValue {
    /// Returns the boolean payload, if this is a flag value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for ArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            // Integral values serialize as integers so `8080` stays `8080`.
            Self::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A validation regular expression.
///
/// Wraps [`Regex`] so specifications can be compared and serialized by the
/// pattern's source text.
///
/// # Examples
///
/// ```
/// use cli_args_core::Pattern;
///
/// let pattern = Pattern::new(r"^\d{4}$").unwrap();
/// assert!(pattern.is_match("2024"));
/// assert!(!pattern.is_match("24"));
/// assert!(Pattern::new("(").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compiles a pattern from its source text.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self)
    }

    /// Returns the pattern's source text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Tests whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::new(&source).map_err(serde::de::Error::custom)
    }
}

/// Specification for one accepted argument.
///
/// Use [`new`](ArgSpec::new), [`boolean`](ArgSpec::boolean) or
/// [`number`](ArgSpec::number) to create a specification, then chain the
/// builder methods.
///
/// # Examples
///
/// ```
/// use cli_args_core::{ArgSpec, ArgValue, ValueKind};
///
/// let port = ArgSpec::number("port")
///     .with_alias('p')
///     .with_default(8080.0)
///     .with_description("Port to listen on");
/// assert_eq!(port.kind, ValueKind::Number);
/// assert_eq!(port.default_value, Some(ArgValue::Number(8080.0)));
///
/// let name = ArgSpec::new("name").with_pattern(r"^[a-z]+$").unwrap();
/// assert!(name.validation_pattern.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Unique argument name (e.g. "port").
    pub name: String,
    /// Single-character alias (e.g. 'p').
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<char>,
    /// Value coercion tag.
    #[serde(rename = "type", default)]
    pub kind: ValueKind,
    /// Value used when the argument is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ArgValue>,
    /// Help text shown in usage output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pattern the value's string form must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_pattern: Option<Pattern>,
    /// Message reported when the pattern does not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
}

impl ArgSpec {
    /// Creates a string argument.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
            kind: ValueKind::String,
            default_value: None,
            description: None,
            validation_pattern: None,
            validation_message: None,
        }
    }

    /// Creates a boolean flag.
    pub fn boolean(name: &str) -> Self {
        Self::new(name).with_kind(ValueKind::Boolean)
    }

    /// Creates a numeric argument.
    pub fn number(name: &str) -> Self {
        Self::new(name).with_kind(ValueKind::Number)
    }

    /// The implicit help flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use cli_args_core::{ArgSpec, ArgValue};
    ///
    /// let help = ArgSpec::help();
    /// assert_eq!(help.name, "help");
    /// assert_eq!(help.alias, Some('?'));
    /// assert_eq!(help.default_value, Some(ArgValue::Bool(false)));
    /// ```
    pub fn help() -> Self {
        Self::boolean(HELP_NAME)
            .with_alias(HELP_ALIAS)
            .with_default(false)
            .with_description("Display this help")
    }

    /// Sets the value kind.
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the single-character alias.
    pub fn with_alias(mut self, alias: char) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, value: impl Into<ArgValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a validation pattern.
    ///
    /// # Errors
    ///
    /// Returns the compile error if `source` is not a valid regex.
    pub fn with_pattern(mut self, source: &str) -> Result<Self, regex::Error> {
        self.validation_pattern = Some(Pattern::new(source)?);
        Ok(self)
    }

    /// Sets the message reported when the pattern does not match.
    pub fn with_validation_message(mut self, message: &str) -> Self {
        self.validation_message = Some(message.to_string());
        self
    }

    /// Returns `true` for the implicit help flag.
    pub fn is_help(&self) -> bool {
        self.name == HELP_NAME
    }
}

/// Arguments produced by a parser, keyed by specification name.
///
/// A name with no entry is unset.
///
/// # Examples
///
/// ```
/// use cli_args_core::{ArgValue, ParsedArgs};
///
/// let mut args = ParsedArgs::new();
/// args.insert("port", 8080.0);
/// assert_eq!(args.get("port"), Some(&ArgValue::Number(8080.0)));
/// assert!(args.get("host").is_none());
/// assert!(!args.help_requested());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedArgs(BTreeMap<String, ArgValue>);

impl ParsedArgs {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, returning the previous one.
    pub fn insert(&mut self, name: &str, value: impl Into<ArgValue>) -> Option<ArgValue> {
        self.0.insert(name.to_string(), value.into())
    }

    /// Returns the value for `name`, if set.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    /// Returns `true` when `name` has a value.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` only when the help flag is set to `true`.
    pub fn help_requested(&self) -> bool {
        self.get(HELP_NAME).and_then(ArgValue::as_bool) == Some(true)
    }
}

impl<K: Into<String>, V: Into<ArgValue>> FromIterator<(K, V)> for ParsedArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_spec_deserializes_from_json() {
        let json = r#"{
            "name": "port",
            "alias": "p",
            "type": "number",
            "default_value": 8080,
            "description": "Port to listen on"
        }"#;
        let spec: ArgSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec,
            ArgSpec::number("port")
                .with_alias('p')
                .with_default(8080.0)
                .with_description("Port to listen on")
        );
    }

    #[test]
    fn test_arg_spec_defaults_to_string_kind() {
        let spec: ArgSpec = serde_json::from_str(r#"{"name": "host"}"#).unwrap();
        assert_eq!(spec.kind, ValueKind::String);
        assert!(spec.default_value.is_none());
    }

    #[test]
    fn test_invalid_pattern_fails_deserialization() {
        let json = r#"{"name": "id", "validation_pattern": "("}"#;
        assert!(serde_json::from_str::<ArgSpec>(json).is_err());
    }

    #[test]
    fn test_pattern_serializes_as_source() {
        let spec = ArgSpec::new("id").with_pattern(r"^\d+$").unwrap();
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["validation_pattern"], r"^\d+$");
        assert_eq!(value["type"], "string");
    }

    #[test]
    fn test_untagged_default_values() {
        let flag: ArgValue = serde_json::from_str("true").unwrap();
        let number: ArgValue = serde_json::from_str("3").unwrap();
        let text: ArgValue = serde_json::from_str(r#""info""#).unwrap();
        assert_eq!(flag, ArgValue::Bool(true));
        assert_eq!(number, ArgValue::Number(3.0));
        assert_eq!(text, ArgValue::Text("info".to_string()));
    }

    #[test]
    fn test_parsed_args_serialize_integral_numbers_as_integers() {
        let args: ParsedArgs = [("port", ArgValue::Number(8080.0)), ("ratio", 0.5.into())]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"port":8080,"ratio":0.5}"#);
    }

    #[test]
    fn test_help_requested_only_for_true() {
        let mut args = ParsedArgs::new();
        assert!(!args.help_requested());
        args.insert(HELP_NAME, false);
        assert!(!args.help_requested());
        args.insert(HELP_NAME, "true");
        assert!(!args.help_requested());
        args.insert(HELP_NAME, true);
        assert!(args.help_requested());
    }
}
