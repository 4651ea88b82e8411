use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::record::{FIELD_NAMES, PaperRecord};

/// Writes `records` to `path` as CSV, replacing any existing file.
///
/// The header row is always written, even for an empty slice.
pub fn write_csv(records: &[PaperRecord], path: &Path) -> Result<(), Error> {
    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;

    wtr.write_record(FIELD_NAMES).map_err(csv_err)?;
    for record in records {
        wtr.serialize(record).map_err(csv_err)?;
    }

    wtr.flush().map_err(|e| csv_err(e.into()))?;
    Ok(())
}

/// Prints each record as a JSON object, one per line.
pub fn print_records<W: Write>(records: &[PaperRecord], mut out: W) -> Result<(), Error> {
    for record in records {
        let line = serde_json::to_string(record).map_err(std::io::Error::from)?;
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
