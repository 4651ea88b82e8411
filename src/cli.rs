use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::client::Client;
use crate::sink::{print_records, write_csv};

/// Fetch research papers from PubMed.
#[derive(Parser, Debug)]
#[command(name = "pubmed-papers")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Search query for PubMed.
    pub query: String,

    /// Output file to save results as CSV.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub debug: bool,
}

/// Fetches papers for `cli.query` and writes them to `cli.file` as CSV, or to `out`.
pub fn run<W: Write>(cli: &Cli, client: &Client, out: W) -> Result<()> {
    info!("Fetching papers for query: {}", cli.query);
    let papers = client.fetch_papers(&cli.query)?;

    if papers.is_empty() {
        info!("No papers found for the given query.");
        return Ok(());
    }

    match &cli.file {
        Some(path) => {
            write_csv(&papers, path)?;
            info!("Results saved to {}", path.display());
        }
        None => print_records(&papers, out)?,
    }
    Ok(())
}
