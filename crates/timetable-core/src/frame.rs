//! Source frame layout and structural filtering.

use anyhow::Result;
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use timetable_common::cell_is_null;

use crate::error::BuildError;

pub const SHEET_NAME: &str = "sheet_name";
pub const GROUP: &str = "group";
pub const SUBJECT_FULL_NAME: &str = "subject full name";
pub const ROOM: &str = "room";
pub const CLASS_TYPE: &str = "lecture/practice/laboratory";
pub const DAY: &str = "day";
pub const TIMESLOT: &str = "timeslot";

pub const LECTURE_HOURS: &str = "Lecture hours";
pub const PRACTICE_HOURS: &str = "Practice hours";
pub const LABORATORY_HOURS: &str = "Laboratory hours";
pub const PROJECT_HOURS: &str = "Project hours";
pub const LECTURERS: &str = "lecturers with titles";
pub const PRACTICE_TEACHERS: &str = "practice/lab teachers with titles";

/// Columns read from a timetable frame.
pub const TIMETABLE_COLUMNS: &[&str] = &[SHEET_NAME, GROUP, SUBJECT_FULL_NAME, ROOM, CLASS_TYPE];

/// Columns read from a teaching-load frame.
pub const TEACHING_LOAD_COLUMNS: &[&str] = &[
    SHEET_NAME,
    SUBJECT_FULL_NAME,
    LECTURE_HOURS,
    PRACTICE_HOURS,
    LABORATORY_HOURS,
    PROJECT_HOURS,
    LECTURERS,
    PRACTICE_TEACHERS,
];

/// Columns that are all empty on a timetable row describing an empty day.
pub const EMPTY_DAY_COLUMNS: &[&str] = &[DAY, TIMESLOT, SUBJECT_FULL_NAME, ROOM, CLASS_TYPE, GROUP];

/// Fail with [`BuildError::MissingColumn`] unless every column is present.
pub fn require_columns(
    df: &DataFrame,
    columns: &[&str],
    source_kind: &'static str,
) -> Result<(), BuildError> {
    for column in columns {
        if df.column(column).is_err() {
            return Err(BuildError::MissingColumn {
                source_kind,
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

/// Drop timetable rows with a null in any of [`EMPTY_DAY_COLUMNS`].
///
/// Sheets pad the week with rows that only carry a day or a timeslot; those
/// rows describe no class.
pub fn drop_empty_days(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, EMPTY_DAY_COLUMNS, "timetable")?;
    let keep: Vec<bool> = (0..df.height())
        .map(|idx| {
            !EMPTY_DAY_COLUMNS
                .iter()
                .any(|column| cell_is_null(df, column, idx))
        })
        .collect();
    let dropped = keep.iter().filter(|k| !**k).count();
    let mask = BooleanChunked::from_slice("empty_days".into(), &keep);
    let filtered = df.filter(&mask)?;
    tracing::debug!(dropped, kept = filtered.height(), "dropped empty timetable days");
    Ok(filtered)
}
