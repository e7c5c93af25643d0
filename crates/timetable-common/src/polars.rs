//! Polars `AnyValue` and cell accessor helpers.
//!
//! Source sheets arrive as loosely typed frames: a group code may be read as
//! an integer, an hours column as text. These helpers give the record
//! extractors one consistent view of a cell.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, and formats floats without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use timetable_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(3.0)), "3");
/// assert_eq!(any_to_string(AnyValue::String("hall 8 CW")), "hall 8 CW");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use timetable_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
///
/// Strings are parsed after trimming; `NaN` is treated as missing.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let parsed = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    };
    parsed.filter(|v| !v.is_nan())
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Returns true when the cell is null, `NaN`, or the column is absent.
pub fn cell_is_null(df: &DataFrame, column: &str, idx: usize) -> bool {
    match df.column(column).and_then(|c| c.get(idx)) {
        Ok(AnyValue::Null) | Err(_) => true,
        Ok(AnyValue::Float64(v)) => v.is_nan(),
        Ok(AnyValue::Float32(v)) => v.is_nan(),
        Ok(_) => false,
    }
}

/// Reads a cell as text, returning `None` for null cells.
///
/// Text cells are returned verbatim (no trimming); canonicalizers own all
/// whitespace handling.
pub fn cell_text(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
    if cell_is_null(df, column, idx) {
        return None;
    }
    df.column(column)
        .and_then(|c| c.get(idx))
        .ok()
        .map(any_to_string)
}

/// Reads a cell as a number, returning `None` for null or non-numeric cells.
pub fn cell_f64(df: &DataFrame, column: &str, idx: usize) -> Option<f64> {
    df.column(column)
        .and_then(|c| c.get(idx))
        .ok()
        .and_then(any_to_f64)
}

/// Builds a string column from owned values.
pub fn string_column(name: &str, values: Vec<String>) -> Column {
    Series::new(name.into(), values).into_column()
}
