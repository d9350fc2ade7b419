//! Command-line parsing backed by clap.
//!
//! The specification set is turned into a `clap::Command` at parse time:
//! every specification becomes a `--<name>` option (with `-<alias>` when an
//! alias is set). Boolean specifications are flags; all others take exactly
//! one value. clap's own help and version flags are disabled so the implicit
//! `help` specification is handled like any other flag.
//!
//! Values are coerced per [`ValueKind`], then defaults fill whatever was not
//! given. A number that does not parse is kept as text so validation can
//! report it.
//!
//! Specification sets clap cannot represent (a second `help`, an alias of
//! `-`, duplicate names) are rejected with a [`ParseError`] before the
//! command is built.

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use cli_args_core::{
    ArgParser, ArgSpec, ArgValue, ParseError, ParsedArgs, ValueKind, validate_specs,
};
use tracing::debug;

const COMMAND_NAME: &str = "cli-args";

/// [`ArgParser`] over a fixed command line.
///
/// # Examples
///
/// ```
/// use cli_args::CommandLineParser;
/// use cli_args_core::{ArgParser, ArgSpec, ArgValue};
///
/// let parser = CommandLineParser::new(["--port", "8080", "-v"]);
/// let specs = [ArgSpec::number("port"), ArgSpec::boolean("verbose").with_alias('v')];
///
/// let parsed = parser.parse(&specs).unwrap();
/// assert_eq!(parsed.get("port"), Some(&ArgValue::Number(8080.0)));
/// assert_eq!(parsed.get("verbose"), Some(&ArgValue::Bool(true)));
/// ```
#[derive(Debug, Clone)]
pub struct CommandLineParser {
    argv: Vec<OsString>,
}

impl CommandLineParser {
    /// Creates a parser over `argv`, which must not include the program name.
    pub fn new<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a parser over the current process arguments.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().skip(1))
    }
}

impl ArgParser for CommandLineParser {
    fn parse(&self, specs: &[ArgSpec]) -> Result<ParsedArgs, ParseError> {
        check_specs(specs)?;

        let matches = build_command(specs)
            .try_get_matches_from(&self.argv)
            .map_err(parse_error)?;

        let parsed = collect_values(&matches, specs);
        debug!(arguments = parsed.len(), "command line parsed");
        Ok(parsed)
    }
}

/// Runs the structural checks on the caller's specifications, skipping the
/// help flag the orchestrator puts first.
fn check_specs(specs: &[ArgSpec]) -> Result<(), ParseError> {
    let caller_specs = match specs.split_first() {
        Some((first, rest)) if first.is_help() => rest,
        _ => specs,
    };
    match validate_specs(caller_specs).into_iter().next() {
        Some(err) => {
            debug!(error = %err, "specification set rejected");
            Err(ParseError::new(err.to_string()))
        }
        None => Ok(()),
    }
}

fn build_command(specs: &[ArgSpec]) -> Command {
    specs.iter().fold(
        Command::new(COMMAND_NAME)
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .disable_colored_help(true)
            .args_override_self(true),
        |command, spec| command.arg(build_arg(spec)),
    )
}

fn build_arg(spec: &ArgSpec) -> Arg {
    let mut arg = Arg::new(spec.name.clone()).long(spec.name.clone());
    if let Some(alias) = spec.alias {
        arg = arg.short(alias);
    }
    match spec.kind {
        ValueKind::Boolean => arg.action(ArgAction::SetTrue),
        ValueKind::Number => value_arg(arg).allow_negative_numbers(true),
        ValueKind::String => value_arg(arg),
    }
}

fn value_arg(arg: Arg) -> Arg {
    arg.action(ArgAction::Set)
        .num_args(1)
        .value_parser(clap::value_parser!(String))
}

fn collect_values(matches: &ArgMatches, specs: &[ArgSpec]) -> ParsedArgs {
    let mut parsed = ParsedArgs::new();
    for spec in specs {
        let given = match spec.kind {
            ValueKind::Boolean => (matches.value_source(&spec.name)
                == Some(ValueSource::CommandLine))
            .then_some(ArgValue::Bool(true)),
            ValueKind::Number => matches
                .get_one::<String>(&spec.name)
                .map(|raw| coerce_number(raw)),
            ValueKind::String => matches
                .get_one::<String>(&spec.name)
                .map(|raw| ArgValue::Text(raw.clone())),
        };
        if let Some(value) = given.or_else(|| spec.default_value.clone()) {
            parsed.insert(&spec.name, value);
        }
    }
    parsed
}

fn coerce_number(raw: &str) -> ArgValue {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => ArgValue::Number(n),
        _ => ArgValue::Text(raw.to_string()),
    }
}

/// Keeps the first line of clap's message, without its `error: ` prefix.
fn parse_error(err: clap::Error) -> ParseError {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    ParseError::new(first.strip_prefix("error: ").unwrap_or(first).trim())
}

#[cfg(test)]
mod tests {
    use cli_args_core::augment;

    use super::*;

    fn parse(argv: &[&str], specs: &[ArgSpec]) -> Result<ParsedArgs, ParseError> {
        CommandLineParser::new(argv.iter().copied()).parse(specs)
    }

    #[test]
    fn test_parses_long_and_short_forms() {
        let specs = [
            ArgSpec::new("name").with_alias('n'),
            ArgSpec::new("city"),
        ];
        let parsed = parse(&["-n", "ada", "--city", "london"], &specs).unwrap();
        assert_eq!(parsed.get("name"), Some(&ArgValue::from("ada")));
        assert_eq!(parsed.get("city"), Some(&ArgValue::from("london")));
    }

    #[test]
    fn test_unset_values_are_absent() {
        let specs = [ArgSpec::new("name"), ArgSpec::boolean("verbose")];
        let parsed = parse(&[], &specs).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_defaults_fill_unset_values() {
        let specs = [
            ArgSpec::number("port").with_default(80.0),
            ArgSpec::boolean("verbose").with_default(false),
            ArgSpec::new("mode").with_default("fast"),
        ];
        let parsed = parse(&["--mode", "slow"], &specs).unwrap();
        assert_eq!(parsed.get("port"), Some(&ArgValue::Number(80.0)));
        assert_eq!(parsed.get("verbose"), Some(&ArgValue::Bool(false)));
        assert_eq!(parsed.get("mode"), Some(&ArgValue::from("slow")));
    }

    #[test]
    fn test_non_numeric_number_kept_as_text() {
        let specs = [ArgSpec::number("count")];
        let parsed = parse(&["--count", "many"], &specs).unwrap();
        assert_eq!(parsed.get("count"), Some(&ArgValue::from("many")));
    }

    #[test]
    fn test_help_flag_alias() {
        let specs = augment(&[ArgSpec::new("input")]);
        let parsed = parse(&["-?"], &specs).unwrap();
        assert!(parsed.help_requested());
        assert!(!parsed.contains("input"));

        let parsed = parse(&["--input", "a.txt"], &specs).unwrap();
        assert!(!parsed.help_requested());
        assert_eq!(parsed.get("help"), Some(&ArgValue::Bool(false)));
    }

    #[test]
    fn test_negative_numbers_accepted() {
        let specs = [ArgSpec::number("offset")];
        let parsed = parse(&["--offset", "-5"], &specs).unwrap();
        assert_eq!(parsed.get("offset"), Some(&ArgValue::Number(-5.0)));
    }

    #[test]
    fn test_last_value_wins() {
        let specs = [ArgSpec::new("name")];
        let parsed = parse(&["--name", "a", "--name", "b"], &specs).unwrap();
        assert_eq!(parsed.get("name"), Some(&ArgValue::from("b")));
    }

    #[test]
    fn test_unknown_option_is_a_parse_error() {
        let specs = [ArgSpec::new("name")];
        let err = parse(&["--bogus"], &specs).unwrap_err();
        assert!(err.message.contains("--bogus"), "{}", err.message);
        assert!(!err.message.starts_with("error:"));
    }

    #[test]
    fn test_missing_value_is_a_parse_error() {
        let specs = [ArgSpec::new("name")];
        assert!(parse(&["--name"], &specs).is_err());
    }

    #[test]
    fn test_second_help_spec_is_a_parse_error() {
        let specs = augment(&[ArgSpec::boolean("help")]);
        let err = parse(&["--help"], &specs).unwrap_err();
        assert_eq!(err.message, "argument name is reserved: help");
    }

    #[test]
    fn test_unusable_alias_is_a_parse_error() {
        let specs = augment(&[ArgSpec::new("x").with_alias('-')]);
        let err = parse(&["--x", "1"], &specs).unwrap_err();
        assert_eq!(err.message, "invalid argument alias: '-'");
    }
}
