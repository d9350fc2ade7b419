//! Command-line argument retrieval with validation and usage reporting.
//!
//! This crate wires the validation pipeline from [`cli_args_core`] to
//! concrete collaborators:
//!
//! - [`CommandLineParser`] — clap-backed parser built from the
//!   specifications at parse time.
//! - [`TextUsageRenderer`] — plain-text usage document.
//! - [`TracingLogger`] / [`StdoutSink`] — error events and usage output.
//!
//! Specification sets can be kept in YAML or JSON files ([`SpecFile`]).
//!
//! # Example
//!
//! ```no_run
//! use cli_args::{ArgSpec, TracingLogger, get};
//!
//! let specs = [
//!     ArgSpec::new("input").with_alias('i').with_description("File to read"),
//!     ArgSpec::number("limit").with_default(10.0),
//! ];
//!
//! let Some(args) = get("reader", "Reads a file.", &specs, &TracingLogger) else {
//!     std::process::exit(2);
//! };
//! println!("reading {}", args.get("input").unwrap());
//! ```

mod config;
mod console;
mod error;
mod parser;
mod usage;

use std::ffi::OsString;

pub use cli_args_core::{ArgSpec, ArgValue, Logger, ParsedArgs, ValueKind};
pub use config::{SpecFile, SpecFormat};
pub use console::{StdoutSink, TracingLogger};
pub use error::{CliArgsError, Result};
pub use parser::CommandLineParser;
pub use usage::TextUsageRenderer;

/// Validates the current process arguments against `specs`.
///
/// Returns `None` after printing usage when the arguments are invalid or
/// help was requested.
pub fn get(
    header: &str,
    content: &str,
    specs: &[ArgSpec],
    logger: &impl Logger,
) -> Option<ParsedArgs> {
    retrieve(header, content, specs, logger, &CommandLineParser::from_env())
}

/// Validates `argv` (without the program name) against `specs`.
pub fn get_from<I, T>(
    header: &str,
    content: &str,
    specs: &[ArgSpec],
    logger: &impl Logger,
    argv: I,
) -> Option<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    retrieve(header, content, specs, logger, &CommandLineParser::new(argv))
}

fn retrieve(
    header: &str,
    content: &str,
    specs: &[ArgSpec],
    logger: &impl Logger,
    parser: &CommandLineParser,
) -> Option<ParsedArgs> {
    cli_args_core::get(
        header,
        content,
        specs,
        logger,
        parser,
        &TextUsageRenderer,
        &mut StdoutSink,
    )
}
