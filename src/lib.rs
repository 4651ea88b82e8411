//! A small Rust client for PubMed search, built on the NCBI E-utilities.
//!
//! The flow mirrors a one-shot literature lookup:
//! search for matching PubMed IDs, fetch their summaries, then shape them into
//! flat [`PaperRecord`] rows that can be printed or written as CSV.
//!
//! ## Quick start
//! - The base URL defaults to `https://eutils.ncbi.nlm.nih.gov/entrez/eutils`.
//!   Override it via the `PUBMED_EUTILS_URL` environment variable or a
//!   `.pubmedrc` file (current directory or home directory).
//! - Call [`Client::fetch_papers`] with a query.
//!
//! ```no_run
//! use anyhow::Result;
//! use pubmed_papers::{Client, write_csv};
//!
//! fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!     let papers = client.fetch_papers("cancer immunotherapy")?;
//!     write_csv(&papers, std::path::Path::new("papers.csv"))?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

pub mod cli;
mod client;
mod config;
mod error;
mod eutils;
mod record;
mod sink;
mod util;

pub use client::{Client, ClientConfig, DEFAULT_MAX_RESULTS, DEFAULT_URL};
pub use error::Error;
pub use record::{FIELD_NAMES, NOT_AVAILABLE, NOT_IMPLEMENTED, PaperRecord};
pub use sink::{print_records, write_csv};
