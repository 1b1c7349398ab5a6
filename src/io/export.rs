//! CSV export for estimate breakdowns.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::comparison::reference_bands;
use crate::estimator::Estimate;

/// Column header for CSV breakdown export.
const HEADER: &str = "category,kg_co2e,share_pct,efficient_kg,high_kg";

/// Exports an estimate breakdown to a CSV file at the given path.
///
/// Writes a header row followed by one data row per breakdown category,
/// including the share percentage and the efficient/high reference bands.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(estimate: &Estimate, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(estimate, buf)
}

/// Writes an estimate breakdown as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(estimate: &Estimate, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // One row per breakdown category, in breakdown order
    for band in reference_bands(estimate) {
        wtr.write_record(&[
            band.category.label().to_string(),
            format!("{:.4}", band.yours_kg),
            format!("{:.2}", estimate.share_pct(band.category)),
            format!("{:.4}", band.efficient_kg),
            format!("{:.4}", band.high_kg),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
