//! Field shape listing

use crate::{cli::CliConfig, Result};
use clap::Args;
use console::style;
use itertools::Itertools;
use std::io::{self, Write};
use tm_variable::Precision;

/// Arguments for the shape command
#[derive(Debug, Clone, Args)]
pub struct ShapeArgs {
    /// Element type of values and variances [default: from config, else f64]
    #[arg(long)]
    pub precision: Option<Precision>,
}

/// Execute the shape command
pub fn shape_command(args: ShapeArgs, config: &CliConfig) -> Result<()> {
    let precision = args.precision.unwrap_or(config.build.default_precision);
    let descriptors = precision.descriptors();
    let width = descriptors.iter().map(|d| d.name.len()).max().unwrap_or(0);

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{}",
        style(format!("VariableFields<{}>", precision)).cyan().bold()
    )?;
    writeln!(
        out,
        "{}",
        descriptors
            .iter()
            .map(|d| format!("  {}  {:<width$}  {}", d.position, d.name, d.type_name))
            .join("\n")
    )?;
    Ok(())
}
