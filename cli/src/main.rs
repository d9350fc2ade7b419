use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use cli_args::{ParsedArgs, SpecFile, TextUsageRenderer, TracingLogger, get_from};
use cli_args_core::{UsageRenderer, augment, usage_sections};
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "cli-args")]
#[command(about = "Validate command-line arguments against a specification file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate the arguments after `--` and print them.
    Check(CheckArgs),
    /// Print the usage document of a specification file.
    Usage(UsageArgs),
    /// Check one or more specification files for structural problems.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Specification file (YAML or JSON).
    #[arg(long)]
    spec: PathBuf,
    /// Output format for the validated arguments.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Arguments to validate.
    #[arg(last = true)]
    args: Vec<OsString>,
}

#[derive(Debug, Args)]
struct UsageArgs {
    /// Specification file (YAML or JSON).
    #[arg(long)]
    spec: PathBuf,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Specification files to check.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Exit code when arguments are rejected or help was shown.
const EXIT_REPORTED: i32 = 2;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Check(args) => run_check(args),
        Command::Usage(args) => run_usage(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let spec = load_spec(&args.spec)?;

    let Some(parsed) = get_from(
        &spec.header,
        &spec.content,
        &spec.options,
        &TracingLogger,
        args.args,
    ) else {
        std::process::exit(EXIT_REPORTED);
    };

    println!("{}", format_parsed(&parsed, args.format)?);
    Ok(())
}

fn run_usage(args: UsageArgs) -> Result<(), String> {
    let spec = load_spec(&args.spec)?;
    let sections = usage_sections(&spec.header, &spec.content, &augment(&spec.options));
    println!("{}", TextUsageRenderer.render(&sections));
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut failures = 0usize;
    for path in &args.inputs {
        match SpecFile::load(path) {
            Ok(spec) => println!("{}: ok ({} options)", path.display(), spec.options.len()),
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} specification file(s) failed validation"));
    }
    Ok(())
}

fn load_spec(path: &Path) -> Result<SpecFile, String> {
    SpecFile::load(path).map_err(|err| format!("Failed to load '{}': {err}", path.display()))
}

fn format_parsed(parsed: &ParsedArgs, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(parsed)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(parsed).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}
