//! # sgate CLI entry point
//!
//! Parses command-line arguments, initializes logging, resolves validator
//! options and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use sgate_cli::languages::run_languages;
use sgate_cli::validate::{run_validate, ValidateArgs};
use sgate_cli::{load_options, EXIT_ERROR};

/// Manifest gate for AI-generated training games.
///
/// Checks that generated manifests are structurally sound before they reach
/// the game engine, and reports every problem with its exact location.
#[derive(Parser, Debug)]
#[command(name = "sgate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML or JSON validator configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate manifests or bare scene payloads.
    Validate(ValidateArgs),

    /// Print the language codes accepted without a warning.
    Languages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "sgate starting");

    let result = load_options(cli.config.as_deref()).and_then(|options| match &cli.command {
        Commands::Validate(args) => run_validate(args, &options),
        Commands::Languages => run_languages(&options),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
