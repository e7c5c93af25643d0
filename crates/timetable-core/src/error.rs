use thiserror::Error;
use timetable_model::{DimensionKind, LabelError};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{source_kind} frame is missing required column '{column}'")]
    MissingColumn {
        source_kind: &'static str,
        column: String,
    },

    #[error("row {row} of sheet '{sheet_name}': {source}")]
    Label {
        row: usize,
        sheet_name: String,
        #[source]
        source: LabelError,
    },

    #[error("{dimension} identifier '{key}' is shared by rows with different attributes")]
    KeyCollision {
        dimension: DimensionKind,
        key: String,
    },
}
