//! Extraction of typed records from source frames.

use polars::prelude::DataFrame;
use timetable_common::{cell_f64, cell_text};
use timetable_model::{TeachingLoadRecord, TimetableRecord};

use crate::error::BuildError;
use crate::frame::{
    CLASS_TYPE, GROUP, LABORATORY_HOURS, LECTURE_HOURS, LECTURERS, PRACTICE_HOURS,
    PRACTICE_TEACHERS, PROJECT_HOURS, ROOM, SHEET_NAME, SUBJECT_FULL_NAME, TEACHING_LOAD_COLUMNS,
    TIMETABLE_COLUMNS, require_columns,
};

/// One [`TimetableRecord`] per frame row.
pub fn timetable_records(df: &DataFrame) -> Result<Vec<TimetableRecord>, BuildError> {
    require_columns(df, TIMETABLE_COLUMNS, "timetable")?;
    Ok((0..df.height())
        .map(|row| TimetableRecord {
            row,
            sheet_name: cell_text(df, SHEET_NAME, row).unwrap_or_default(),
            group: cell_text(df, GROUP, row),
            subject: cell_text(df, SUBJECT_FULL_NAME, row),
            room: cell_text(df, ROOM, row),
            class_type: cell_text(df, CLASS_TYPE, row),
        })
        .collect())
}

/// One [`TeachingLoadRecord`] per frame row.
///
/// Hours that are null, `NaN` or not numeric read as absent.
pub fn teaching_load_records(df: &DataFrame) -> Result<Vec<TeachingLoadRecord>, BuildError> {
    require_columns(df, TEACHING_LOAD_COLUMNS, "teaching-load")?;
    Ok((0..df.height())
        .map(|row| TeachingLoadRecord {
            row,
            sheet_name: cell_text(df, SHEET_NAME, row).unwrap_or_default(),
            subject: cell_text(df, SUBJECT_FULL_NAME, row),
            lecture_hours: cell_f64(df, LECTURE_HOURS, row),
            practice_hours: cell_f64(df, PRACTICE_HOURS, row),
            laboratory_hours: cell_f64(df, LABORATORY_HOURS, row),
            project_hours: cell_f64(df, PROJECT_HOURS, row),
            lecturers: cell_text(df, LECTURERS, row),
            practice_teachers: cell_text(df, PRACTICE_TEACHERS, row),
        })
        .collect())
}
