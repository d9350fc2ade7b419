//! Process-level logger and output sink.

use cli_args_core::{Logger, OutputSink};

/// [`Logger`] that emits validation messages as `tracing` error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// [`OutputSink`] that prints to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}
