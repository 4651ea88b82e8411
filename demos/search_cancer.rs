use anyhow::Result;
use pubmed_papers::{Client, print_records, write_csv};
use std::path::Path;

fn main() -> Result<()> {
    // Example program that calls the library API.
    // The endpoint can be overridden via PUBMED_EUTILS_URL or a `.pubmedrc` file.
    let client = Client::from_env()?.with_max_results(5);

    let papers = client.fetch_papers("cancer immunotherapy")?;
    if papers.is_empty() {
        println!("no matches");
        return Ok(());
    }

    print_records(&papers, std::io::stdout().lock())?;
    write_csv(&papers, Path::new("cancer_immunotherapy.csv"))?;
    Ok(())
}
