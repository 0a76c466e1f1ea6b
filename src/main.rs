//! Schoolspace CLI - minimum space program estimator for K-12 campuses
//!
//! Usage: schoolspace <COMMAND>
//!
//! Commands:
//!   compute  Size the instructional, support and plumbing program
//!   tables   Print the regulatory tables
//!   explain  Describe the compliance methods and the estimate's limits

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    let command = cli.command.name();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            ui::error::print_error(&err, json, command);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    schoolspace::verify_tables()?;

    match cli.command {
        Commands::Compute(args) => {
            commands::compute::cmd_compute(&args, cli.json, cli.color, cli.verbose)
        }
        Commands::Tables => {
            commands::tables::cmd_tables(cli.json, cli.color, cli.verbose)?;
            Ok(0)
        }
        Commands::Explain { brief } => {
            commands::explain::cmd_explain(brief, cli.json, cli.color, cli.verbose)?;
            Ok(0)
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("schoolspace={level}"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
