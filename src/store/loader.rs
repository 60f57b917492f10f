//! Dataset loading from delimited files
//!
//! Rows that cannot be turned into an `AwardRecord` are logged and skipped so a
//! partially parsed record never reaches the store.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::core::award::AwardRecord;
use crate::core::error::AwardError;

const REQUIRED_COLUMNS: [&str; 5] = ["year", "title", "studios", "producers", "winner"];

/// A row exactly as it appears in the source file
#[derive(Debug, Deserialize)]
struct RawAwardRow {
    year: String,
    title: String,
    #[serde(default)]
    studios: String,
    #[serde(default)]
    producers: String,
    #[serde(default)]
    winner: String,
}

/// Outcome of loading a dataset
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records that parsed cleanly, in file order
    pub records: Vec<AwardRecord>,
    /// Number of rows rejected as malformed
    pub skipped: usize,
}

/// Load every award record from the file at `path`
pub fn load_dataset(path: &Path, delimiter: u8) -> Result<LoadReport, AwardError> {
    info!("Loading award dataset from {}", path.display());
    let file = File::open(path).map_err(|e| AwardError::Io(format!("{}: {}", path.display(), e)))?;
    let report = parse_records(file, delimiter)?;
    info!(
        "Loaded {} award records from {} ({} skipped)",
        report.records.len(),
        path.display(),
        report.skipped
    );
    Ok(report)
}

/// Parse award records from any delimited source with a header row
pub fn parse_records<R: Read>(source: R, delimiter: u8) -> Result<LoadReport, AwardError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(AwardError::MalformedRecord {
            line: 1,
            reason: format!("header is missing columns: {}", missing.join(", ")),
        });
    }

    let mut report = LoadReport::default();
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => match AwardError::from(e) {
                AwardError::Io(msg) => return Err(AwardError::Io(msg)),
                e => {
                    warn!("Skipping row: {}", e);
                    report.skipped += 1;
                    continue;
                }
            },
        };

        let line = row.position().map(|pos| pos.line()).unwrap_or(0);
        let parsed = row
            .deserialize::<RawAwardRow>(Some(&headers))
            .map_err(AwardError::from)
            .and_then(|raw| {
                AwardRecord::from_raw(&raw.year, &raw.title, &raw.studios, &raw.producers, &raw.winner)
            });

        match parsed {
            Ok(record) => report.records.push(record),
            Err(e) => {
                warn!("Skipping row: {}", e.at_line(line));
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
