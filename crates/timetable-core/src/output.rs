//! Tabular output of dimension tables.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame};
use timetable_common::string_column;
use timetable_model::{DimensionKind, DimensionRow, DimensionTable};

use crate::dimensions::DimensionSet;

/// Render a dimension table as a frame, identifier column first.
pub fn dimension_to_dataframe<R: DimensionRow>(table: &DimensionTable<R>) -> Result<DataFrame> {
    let names = R::column_names();
    let mut values: Vec<Vec<String>> = vec![Vec::with_capacity(table.len()); names.len()];
    for row in table.rows() {
        for (column, value) in values.iter_mut().zip(row.values()) {
            column.push(value);
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(names.len() + 1);
    columns.push(string_column(R::KIND.id_column(), table.keys().to_vec()));
    for (name, column) in names.iter().zip(values) {
        columns.push(string_column(name, column));
    }
    DataFrame::new(columns).with_context(|| format!("build {} dimension frame", R::KIND))
}

impl DimensionSet {
    /// Every dimension as a frame, in group, subject, room, teacher order.
    pub fn to_dataframes(&self) -> Result<Vec<(DimensionKind, DataFrame)>> {
        Ok(vec![
            (DimensionKind::Group, dimension_to_dataframe(&self.groups)?),
            (DimensionKind::Subject, dimension_to_dataframe(&self.subjects)?),
            (DimensionKind::Room, dimension_to_dataframe(&self.rooms)?),
            (DimensionKind::Teacher, dimension_to_dataframe(&self.teachers)?),
        ])
    }
}
