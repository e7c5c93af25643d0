#![deny(unsafe_code)]

//! Parsers for the correction table CSV files.
//!
//! Values are kept verbatim. Leading or trailing whitespace in a raw form is
//! part of what the table matches, so nothing is trimmed here.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::StandardsError;
use crate::tables::{ExactTable, SubstitutionTable};

struct CsvRows {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvRows {
    fn column(&self, path: &Path, name: &str) -> Result<usize, StandardsError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| StandardsError::csv(path, format!("missing column '{name}'")))
    }
}

fn read_rows(path: &Path) -> Result<CsvRows, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, e.to_string()))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StandardsError::csv(path, e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(CsvRows { headers, rows })
}

/// Read `key_column`/`value_column` pairs, rejecting empty or repeated keys.
pub fn parse_pairs_csv(
    path: &Path,
    key_column: &str,
    value_column: &str,
) -> Result<Vec<(String, String)>, StandardsError> {
    let table = read_rows(path)?;
    let key_idx = table.column(path, key_column)?;
    let value_idx = table.column(path, value_column)?;

    let mut seen = BTreeSet::new();
    let mut pairs = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let key = row.get(key_idx).cloned().unwrap_or_default();
        if key.is_empty() {
            return Err(StandardsError::csv(
                path,
                format!("empty '{key_column}' value"),
            ));
        }
        if !seen.insert(key.clone()) {
            return Err(StandardsError::DuplicateEntry {
                path: path.to_path_buf(),
                key,
            });
        }
        let value = row.get(value_idx).cloned().unwrap_or_default();
        pairs.push((key, value));
    }
    Ok(pairs)
}

pub fn parse_exact_csv(
    path: &Path,
    key_column: &str,
    value_column: &str,
) -> Result<ExactTable, StandardsError> {
    Ok(ExactTable::from_pairs(parse_pairs_csv(
        path,
        key_column,
        value_column,
    )?))
}

pub fn parse_substitution_csv(
    path: &Path,
    pattern_column: &str,
    replacement_column: &str,
) -> Result<SubstitutionTable, StandardsError> {
    Ok(SubstitutionTable::from_pairs(parse_pairs_csv(
        path,
        pattern_column,
        replacement_column,
    )?))
}

/// Read one column as an ordered list, rejecting empty values.
pub fn parse_list_csv(path: &Path, column: &str) -> Result<Vec<String>, StandardsError> {
    let table = read_rows(path)?;
    let idx = table.column(path, column)?;
    table
        .rows
        .iter()
        .map(|row| {
            let value = row.get(idx).cloned().unwrap_or_default();
            if value.is_empty() {
                Err(StandardsError::csv(path, format!("empty '{column}' value")))
            } else {
                Ok(value)
            }
        })
        .collect()
}
