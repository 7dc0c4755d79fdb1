//! `dialpick` binary entry point.

mod catalog;
mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Map `-v` counts to a default filter; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::List(args) => commands::list::handle(args, &cli.global).await,
        Command::Show(args) => commands::show::handle(args, &cli.global).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    debug!(catalog = ?cli.global.catalog, "starting dialpick");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if output::should_color(&cli.global.color) {
                eprintln!("{} {err}", "error:".red().bold());
            } else {
                eprintln!("error: {err}");
            }
            ExitCode::FAILURE
        }
    }
}
