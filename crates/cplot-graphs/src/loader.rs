//! CSV ingestion for benchmark measurement logs

use crate::types::{Dataset, Observation};
use cplot_common::{CplotError, Result};
use std::path::Path;

/// Parse a header-less, comma-delimited, two-column numeric file into a
/// [`Dataset`].
///
/// Column order is fixed: `aggregate_count`, then `computation`. The parse
/// is all-or-nothing: any row with a wrong field count or a non-numeric
/// field aborts the run with a [`CplotError::MalformedRow`], and an input
/// with zero rows is a [`CplotError::EmptyDataset`].
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(from_csv_error)?;

    let mut observations = Vec::new();
    for result in reader.records() {
        let record = result.map_err(from_csv_error)?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(observations.len() as u64 + 1);

        if record.len() != 2 {
            return Err(CplotError::malformed_row(
                line,
                format!("expected 2 fields, found {}", record.len()),
            ));
        }

        let aggregate_count = parse_field(&record, 0, "aggregate_count", line)?;
        let computation = parse_field(&record, 1, "computation", line)?;
        observations.push(Observation::new(aggregate_count, computation));
    }

    if observations.is_empty() {
        return Err(CplotError::empty_dataset(format!(
            "{} contains no rows",
            path.display()
        )));
    }

    tracing::debug!(rows = observations.len(), "loaded input file");
    Ok(Dataset::new(observations))
}

/// Map csv-crate errors onto the cplot taxonomy: I/O failures stay I/O,
/// everything else is a malformed row at the reported position.
fn from_csv_error(err: csv::Error) -> CplotError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => CplotError::Io(io_err),
        _ => CplotError::malformed_row(line, message),
    }
}

fn parse_field(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> Result<f64> {
    let raw = record.get(index).unwrap_or("");
    raw.parse::<f64>().map_err(|err| {
        CplotError::malformed_row_with_source(
            line,
            format!("{name} field '{raw}' is not a number"),
            err,
        )
    })
}
