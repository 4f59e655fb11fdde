//! CSV reading for job imports.
//!
//! Thin wrapper over the `csv` crate that yields the header list plus each
//! data row as a column-name → value map, the shape [`crate::jobs::JobBook`]
//! consumes. Rows whose fields are all empty are dropped.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::StoreError;

/// Parsed CSV content: ordered headers and rows as string maps.
pub type CsvRows = (Vec<String>, Vec<BTreeMap<String, String>>);

/// Read a CSV file into headers plus row maps.
pub fn read_rows(path: &Path) -> Result<CsvRows, StoreError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let row: BTreeMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.clone(), field.to_string()))
            .collect();
        rows.push(row);
    }

    Ok((headers, rows))
}
