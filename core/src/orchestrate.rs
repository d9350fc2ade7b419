//! Argument retrieval: augment, parse, validate, then either return the
//! arguments or report.
//!
//! The parser, usage renderer, logger and output sink are supplied by the
//! caller through the traits in this module. Closures implement
//! [`ArgParser`] and [`UsageRenderer`] directly, which keeps tests and small
//! embeddings free of boilerplate.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//!
//! use cli_args_core::*;
//!
//! struct Log(RefCell<Vec<String>>);
//!
//! impl Logger for Log {
//!     fn error(&self, message: &str) {
//!         self.0.borrow_mut().push(message.to_string());
//!     }
//! }
//!
//! let parser = |_: &[ArgSpec]| -> Result<ParsedArgs, ParseError> { Ok(ParsedArgs::new()) };
//! let renderer = |_: &[UsageSection]| "usage".to_string();
//! let log = Log(RefCell::new(Vec::new()));
//! let mut out: Vec<String> = Vec::new();
//!
//! let outcome = get("tool", "", &[ArgSpec::new("input")], &log, &parser, &renderer, &mut out);
//! assert_eq!(outcome, None);
//! assert_eq!(log.0.borrow().as_slice(), ["input is required"]);
//! assert_eq!(out, vec!["usage".to_string()]);
//! ```

use tracing::debug;

use crate::{
    ArgSpec, ParseError, ParsedArgs, UsageSection, ValidationError, augment, get_error,
    usage_sections,
};

/// Parses a command line against a specification set.
pub trait ArgParser {
    /// Returns the parsed arguments, or the reason the command line was
    /// rejected.
    fn parse(&self, specs: &[ArgSpec]) -> Result<ParsedArgs, ParseError>;
}

impl<F> ArgParser for F
where
    F: Fn(&[ArgSpec]) -> Result<ParsedArgs, ParseError>,
{
    fn parse(&self, specs: &[ArgSpec]) -> Result<ParsedArgs, ParseError> {
        self(specs)
    }
}

/// Renders usage sections to text.
pub trait UsageRenderer {
    fn render(&self, sections: &[UsageSection]) -> String;
}

impl<F> UsageRenderer for F
where
    F: Fn(&[UsageSection]) -> String,
{
    fn render(&self, sections: &[UsageSection]) -> String {
        self(sections)
    }
}

/// Receives the validation error message.
pub trait Logger {
    fn error(&self, message: &str);
}

/// Destination of the rendered usage document.
pub trait OutputSink {
    fn print(&mut self, text: &str);
}

impl OutputSink for Vec<String> {
    fn print(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Runs the parser, capturing a rejection instead of propagating it.
///
/// A rejected command line yields empty arguments alongside the error.
pub fn parse_args(
    parser: &impl ArgParser,
    specs: &[ArgSpec],
) -> (ParsedArgs, Option<ParseError>) {
    match parser.parse(specs) {
        Ok(parsed) => (parsed, None),
        Err(err) => (ParsedArgs::new(), Some(err)),
    }
}

/// Logs `error`, if any, then prints the usage document.
#[allow(clippy::too_many_arguments)]
pub fn show_error_and_or_help(
    error: Option<&ValidationError>,
    logger: &impl Logger,
    header: &str,
    content: &str,
    specs: &[ArgSpec],
    renderer: &impl UsageRenderer,
    sink: &mut impl OutputSink,
) {
    if let Some(err) = error {
        logger.error(&err.to_string());
    }
    sink.print(&renderer.render(&usage_sections(header, content, specs)));
}

/// Parses and validates the command line.
///
/// Returns the parsed arguments when they are valid and help was not
/// requested. Otherwise logs the highest-priority error (if any), prints
/// usage and returns `None`.
#[allow(clippy::too_many_arguments)]
pub fn get(
    header: &str,
    content: &str,
    specs: &[ArgSpec],
    logger: &impl Logger,
    parser: &impl ArgParser,
    renderer: &impl UsageRenderer,
    sink: &mut impl OutputSink,
) -> Option<ParsedArgs> {
    let specs = augment(specs);

    let (parsed, parser_error) = parse_args(parser, &specs);

    let error = get_error(parser_error, &parsed, &specs);

    let help_requested = parsed.help_requested();

    if error.is_some() || help_requested {
        debug!(
            error = error.as_ref().map(tracing::field::display),
            help_requested, "reporting usage"
        );
        show_error_and_or_help(error.as_ref(), logger, header, content, &specs, renderer, sink);
        return None;
    }

    debug!(arguments = parsed.len(), "arguments validated");
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::ArgValue;

    #[derive(Default)]
    struct RecordingLogger {
        errors: RefCell<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<Vec<UsageSection>>>,
    }

    impl UsageRenderer for RecordingRenderer {
        fn render(&self, sections: &[UsageSection]) -> String {
            self.calls.borrow_mut().push(sections.to_vec());
            "5".to_string()
        }
    }

    fn returning(parsed: ParsedArgs) -> impl Fn(&[ArgSpec]) -> Result<ParsedArgs, ParseError> {
        move |_: &[ArgSpec]| Ok(parsed.clone())
    }

    #[test]
    fn test_parse_args_returns_parsed() {
        let parser = returning([("x", 5.0)].into_iter().collect());
        let (parsed, err) = parse_args(&parser, &[]);
        assert_eq!(parsed.get("x"), Some(&ArgValue::Number(5.0)));
        assert!(err.is_none());
    }

    #[test]
    fn test_parse_args_captures_rejection() {
        let parser = |specs: &[ArgSpec]| -> Result<ParsedArgs, ParseError> {
            Err(ParseError::new(format!("{} specs", specs.len())))
        };
        let (parsed, err) = parse_args(&parser, &[]);
        assert!(parsed.is_empty());
        assert_eq!(err, Some(ParseError::new("0 specs")));
    }

    #[test]
    fn test_show_error_logs_and_prints() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let mut out: Vec<String> = Vec::new();
        let err = ValidationError::from(ParseError::new("test error"));

        show_error_and_or_help(Some(&err), &logger, "a", "b", &[], &renderer, &mut out);

        assert_eq!(logger.errors.borrow().as_slice(), ["test error"]);
        assert_eq!(
            renderer.calls.borrow().as_slice(),
            [vec![
                UsageSection::Content {
                    header: "a".into(),
                    content: "b".into(),
                },
                UsageSection::Options {
                    header: "Options".into(),
                    option_list: vec![],
                },
            ]]
        );
        assert_eq!(out, vec!["5".to_string()]);
    }

    #[test]
    fn test_show_help_without_error_does_not_log() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let mut out: Vec<String> = Vec::new();

        show_error_and_or_help(None, &logger, "a", "b", &[], &renderer, &mut out);

        assert!(logger.errors.borrow().is_empty());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_get_returns_parsed_when_valid() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let mut out: Vec<String> = Vec::new();
        let expected: ParsedArgs = [("x", 5.0)].into_iter().collect();
        let parser = returning(expected.clone());

        let outcome = get("a", "b", &[ArgSpec::new("x")], &logger, &parser, &renderer, &mut out);

        assert_eq!(outcome, Some(expected));
        assert!(logger.errors.borrow().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_get_reports_missing_argument() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let mut out: Vec<String> = Vec::new();
        let parser = returning(ParsedArgs::new());

        let outcome = get(
            "a",
            "b",
            &[ArgSpec::new("missing")],
            &logger,
            &parser,
            &renderer,
            &mut out,
        );

        assert_eq!(outcome, None);
        assert_eq!(logger.errors.borrow().as_slice(), ["missing is required"]);
        assert_eq!(out, vec!["5".to_string()]);
    }

    #[test]
    fn test_get_reports_non_numeric_argument() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let mut out: Vec<String> = Vec::new();
        let parser = returning([("n", "x")].into_iter().collect());

        let outcome = get("a", "b", &[ArgSpec::number("n")], &logger, &parser, &renderer, &mut out);

        assert_eq!(outcome, None);
        assert_eq!(logger.errors.borrow().as_slice(), ["n must be a number"]);
    }

    #[test]
    fn test_get_help_requested_prints_usage_only() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let mut out: Vec<String> = Vec::new();
        let parser = returning([("help", true)].into_iter().collect());

        let outcome = get("a", "b", &[], &logger, &parser, &renderer, &mut out);

        assert_eq!(outcome, None);
        assert!(logger.errors.borrow().is_empty());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_get_passes_augmented_specs_to_parser_and_renderer() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let mut out: Vec<String> = Vec::new();
        let seen = RefCell::new(Vec::new());
        let parser = |specs: &[ArgSpec]| -> Result<ParsedArgs, ParseError> {
            seen.borrow_mut().extend(specs.iter().map(|s| s.name.clone()));
            Ok([("help", true)].into_iter().collect())
        };

        let specs = [ArgSpec::number("port").with_default(80.0)];
        get("a", "b", &specs, &logger, &parser, &renderer, &mut out);

        assert_eq!(seen.borrow().as_slice(), ["help", "port"]);
        let calls = renderer.calls.borrow();
        let UsageSection::Options { option_list, .. } = &calls[0][1] else {
            panic!("expected options section");
        };
        assert_eq!(option_list[1].description.as_deref(), Some("(default 80)"));
    }

    #[test]
    fn test_get_reports_parser_error() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let mut out: Vec<String> = Vec::new();
        let parser = |_: &[ArgSpec]| -> Result<ParsedArgs, ParseError> {
            Err(ParseError::new("Unknown option: --bogus"))
        };

        let outcome = get("a", "b", &[ArgSpec::new("x")], &logger, &parser, &renderer, &mut out);

        assert_eq!(outcome, None);
        assert_eq!(logger.errors.borrow().as_slice(), ["Unknown option: --bogus"]);
    }

    #[test]
    fn test_get_is_idempotent() {
        let logger = RecordingLogger::default();
        let renderer = RecordingRenderer::default();
        let parser = returning([("x", "value")].into_iter().collect());
        let specs = [ArgSpec::new("x")];

        let first = get("a", "b", &specs, &logger, &parser, &renderer, &mut Vec::<String>::new());
        let second = get("a", "b", &specs, &logger, &parser, &renderer, &mut Vec::<String>::new());

        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
