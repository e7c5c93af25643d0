//! Shared utilities for the timetable crates.
//!
//! This crate provides Polars cell accessors used when turning source
//! sheets into typed records, and column builders for dimension output.

pub mod polars;

pub use crate::polars::{
    any_to_f64, any_to_string, cell_f64, cell_is_null, cell_text, format_numeric, parse_f64,
    string_column,
};
