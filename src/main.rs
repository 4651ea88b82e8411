use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pubmed_papers::Client;
use pubmed_papers::cli::{Cli, run};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Only this crate gets louder under --debug; dependencies stay at warn.
    let log_level = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,pubmed_papers={log_level}")));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("An error occurred: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    // The spinner and debug log lines share stderr.
    let client = Client::from_env()?.with_progress(!cli.debug);
    run(cli, &client, std::io::stdout().lock())
}
