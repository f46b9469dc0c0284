//! TypeMatch CLI Binary
//!
//! Builds `Variable`s from typed arguments supplied in any order.
//!
//! # Usage
//!
//! ```bash
//! # Run every demonstration scenario
//! typematch demo
//!
//! # Build a variable; argument order does not matter
//! typematch build --arg values=1,4,5 --arg unit=3
//!
//! # List the fields a variable is built from
//! typematch shape --precision f32
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use tm_cli::{
    cli::CliConfig,
    commands::{self, build::BuildArgs, demo::DemoArgs, shape::ShapeArgs},
    diagnostics::setup_error_reporting,
    CliError, Result,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "typematch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build values from typed arguments given in any order",
    long_about = r#"
Each field of a shape has a distinct type, so an argument's type alone says
which field it fills. Arguments may come in any order, omitted fields take
their defaults, and an argument that fits no field or fills one twice is
rejected.

EXAMPLES:
    typematch demo                                   # Run all scenarios
    typematch build -a values=1,4,5 -a unit=3        # Build a variable
    typematch build --precision f32 -a values=1,2,3  # Single precision
    typematch shape                                  # List the fields
    "#
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demonstration scenarios and print each variable
    Demo(DemoArgs),

    /// Build a variable from `--arg` values and print it
    Build(BuildArgs),

    /// List the fields of the variable shape
    Shape(ShapeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_error_reporting()?;
    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format)?;

    let config = CliConfig::load(cli.config.as_deref())?;
    if !config.output.color {
        console::set_colors_enabled(false);
    }

    let result = match cli.command {
        Commands::Demo(args) => commands::demo_command(args, &config),
        Commands::Build(args) => commands::build_command(args, &config),
        Commands::Shape(args) => commands::shape_command(args, &config),
    };

    match result {
        Ok(_) => {
            if cli.verbose > 0 {
                info!("Command completed successfully");
            }
            Ok(())
        }
        Err(e) => {
            use tracing::error;
            if !tm_cli::diagnostics::render_cli_error(&e) {
                error!("{}", e);
            }
            if cli.verbose > 0 {
                error!(?e, "detailed error context");
            }
            std::process::exit(1);
        }
    }
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stdout carries the dumps only
    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .try_init()
                .map_err(|e| CliError::Config(format!("Failed to setup logging: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .try_init()
                .map_err(|e| CliError::Config(format!("Failed to setup logging: {}", e)))?;
        }
    }

    Ok(())
}
