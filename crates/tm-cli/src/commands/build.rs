//! Build a variable from text arguments

use crate::{
    cli::CliConfig,
    diagnostics::{match_diagnostic, parse_diagnostic},
    CliError, Result,
};
use clap::Args;
use std::io::{self, Write};
use tm_core::ArgSet;
use tm_variable::{build_variable, parse_argument, Precision};
use tracing::{debug, info};

/// Arguments for the build command
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Element type of values and variances [default: from config, else f64]
    #[arg(long)]
    pub precision: Option<Precision>,

    /// One field value as `<field>[:<element>]=<value>`, in any order
    #[arg(short = 'a', long = "arg", value_name = "ARG")]
    pub args: Vec<String>,
}

/// Execute the build command
pub fn build_command(args: BuildArgs, config: &CliConfig) -> Result<()> {
    let precision = args.precision.unwrap_or(config.build.default_precision);
    info!(%precision, arguments = args.args.len(), "building variable");

    let mut set = ArgSet::new();
    for (position, text) in args.args.iter().enumerate() {
        let arg = parse_argument(text, precision).map_err(|err| {
            CliError::Rejected(Box::new(parse_diagnostic(&args.args, position, &err)))
        })?;
        set.push_boxed(arg);
    }

    let variable = build_variable(set, precision).map_err(|err| match err {
        tm_variable::Error::Match(err) => {
            CliError::Rejected(Box::new(match_diagnostic(&args.args, &err)))
        }
        other => CliError::Build(other),
    })?;
    debug!(element = variable.element_type(), "variable built");

    let mut out = io::stdout().lock();
    write!(out, "{}", variable)?;
    out.flush()?;
    Ok(())
}
