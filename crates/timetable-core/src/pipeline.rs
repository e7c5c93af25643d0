//! Frame-level entry points.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use timetable_map::NearDuplicateReport;
use timetable_model::{BuildReport, PipelineOptions};
use timetable_standards::CorrectionTables;

use crate::dimensions::{Canonicalizers, DimensionBuilder, DimensionSet};
use crate::records::{teaching_load_records, timetable_records};
use crate::vocabulary::{extract_vocabulary, review_vocabulary};

/// Build every dimension from a timetable frame and a teaching-load frame.
///
/// The timetable frame is expected to be free of empty-day rows already;
/// see [`crate::frame::drop_empty_days`].
pub fn build_dimensions(
    timetable: &DataFrame,
    teaching_load: &DataFrame,
    tables: &CorrectionTables,
    options: PipelineOptions,
) -> Result<(DimensionSet, BuildReport)> {
    let timetable = timetable_records(timetable).context("read timetable records")?;
    let teaching_load = teaching_load_records(teaching_load).context("read teaching-load records")?;
    let builder = DimensionBuilder::from_tables(tables, options);
    builder
        .build(&timetable, &teaching_load)
        .context("build dimensions")
}

/// Near-duplicate review of the pre-correction room, subject and teacher
/// vocabularies of both frames.
pub fn review_frames(
    timetable: &DataFrame,
    teaching_load: &DataFrame,
    tables: &CorrectionTables,
    options: &PipelineOptions,
) -> Result<Vec<NearDuplicateReport>> {
    let timetable = timetable_records(timetable).context("read timetable records")?;
    let teaching_load = teaching_load_records(teaching_load).context("read teaching-load records")?;
    let vocabulary = extract_vocabulary(
        &Canonicalizers::from_tables(tables),
        &timetable,
        &teaching_load,
    );
    Ok(review_vocabulary(
        &vocabulary,
        options.near_duplicate_threshold,
    ))
}
