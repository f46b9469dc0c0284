//! Demonstration scenarios

use crate::{cli::CliConfig, CliError, Result};
use clap::Args;
use console::style;
use std::io::{self, Write};
use tm_variable::scenarios;
use tracing::debug;

/// Arguments for the demo command
#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    /// Run only the scenario at this position (1-based)
    #[arg(long, value_name = "N")]
    pub only: Option<usize>,

    /// Print each scenario's call above its dump
    #[arg(long)]
    pub show_calls: bool,
}

/// Execute the demo command
pub fn demo_command(args: DemoArgs, config: &CliConfig) -> Result<()> {
    let all = scenarios();
    let total = all.len();
    let selected: Vec<_> = match args.only {
        Some(n) if (1..=total).contains(&n) => all.into_iter().skip(n - 1).take(1).collect(),
        Some(n) => {
            return Err(CliError::InvalidInput(format!(
                "scenario {} does not exist; choose 1 to {}",
                n, total
            )))
        }
        None => all,
    };

    let show_calls = args.show_calls || config.demo.show_calls;
    let mut out = io::stdout().lock();
    for scenario in &selected {
        debug!(call = scenario.call, "running scenario");
        if show_calls {
            writeln!(out, "{}", style(scenario.call).dim())?;
        }
        write!(out, "{}", scenario.run())?;
    }
    out.flush()?;

    Ok(())
}
