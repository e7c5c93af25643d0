//! Dimension builders.
//!
//! Each builder decodes the sheet label of every record, runs the field
//! canonicalizer, expands list-valued cells into one row per value and
//! inserts the rows into a [`DimensionTable`] keyed by composite identifier.

mod groups;
mod rooms;
mod subjects;
mod teachers;

pub use teachers::teacher_entries;

use timetable_model::{
    BuildReport, CourseContext, DimensionTable, GroupRow, LabelPolicy, PipelineOptions, RoomRow,
    SkippedRow, SubjectRow, TeacherRow, TeachingLoadRecord, TimetableRecord,
};
use timetable_normalization::{
    GroupCanonicalizer, RoomCanonicalizer, SubjectCanonicalizer, TeacherCanonicalizer,
    decode_label,
};
use timetable_standards::CorrectionTables;
use tracing::{info, warn};

use crate::error::BuildError;

/// A source record with its decoded sheet label.
pub(crate) type Decoded<'a, T> = (CourseContext, &'a T);

/// The four field canonicalizers, built from one set of correction tables.
#[derive(Debug, Clone)]
pub struct Canonicalizers {
    pub rooms: RoomCanonicalizer,
    pub subjects: SubjectCanonicalizer,
    pub teachers: TeacherCanonicalizer,
    pub groups: GroupCanonicalizer,
}

impl Canonicalizers {
    pub fn from_tables(tables: &CorrectionTables) -> Self {
        Self {
            rooms: RoomCanonicalizer::from_tables(tables),
            subjects: SubjectCanonicalizer::from_tables(tables),
            teachers: TeacherCanonicalizer::from_tables(tables),
            groups: GroupCanonicalizer::from_tables(tables),
        }
    }
}

/// Builds dimension tables from typed records.
#[derive(Debug, Clone)]
pub struct DimensionBuilder {
    canonicalizers: Canonicalizers,
    options: PipelineOptions,
}

impl DimensionBuilder {
    pub fn new(canonicalizers: Canonicalizers, options: PipelineOptions) -> Self {
        Self {
            canonicalizers,
            options,
        }
    }

    pub fn from_tables(tables: &CorrectionTables, options: PipelineOptions) -> Self {
        Self::new(Canonicalizers::from_tables(tables), options)
    }

    pub fn canonicalizers(&self) -> &Canonicalizers {
        &self.canonicalizers
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Build all four dimensions.
    ///
    /// Sheet labels are decoded once per record up front, so a skipped row
    /// is reported once and left out of every dimension. Subjects from both
    /// sources share one table, timetable rows first.
    pub fn build(
        &self,
        timetable: &[TimetableRecord],
        teaching_load: &[TeachingLoadRecord],
    ) -> Result<(DimensionSet, BuildReport), BuildError> {
        let mut report = BuildReport::new();
        let timetable = self.decode_timetable(timetable, &mut report)?;
        let teaching_load = self.decode_teaching_load(teaching_load, &mut report)?;

        let groups = self.groups_from(&timetable, &mut report)?;
        let rooms = self.rooms_from(timetable.iter().map(|(_, r)| *r), &mut report)?;

        let mut subjects = DimensionTable::new();
        self.extend_timetable_subjects(&mut subjects, &timetable, &mut report)?;
        self.extend_teaching_load_subjects(&mut subjects, &teaching_load, &mut report)?;
        info!(rows = subjects.len(), "built subject dimension");

        let teachers = self.teachers_from(teaching_load.iter().map(|(_, r)| *r), &mut report)?;

        info!(
            groups = groups.len(),
            subjects = subjects.len(),
            rooms = rooms.len(),
            teachers = teachers.len(),
            self_study = report.self_study.len(),
            skipped = report.skipped.len(),
            collisions = report.collisions.len(),
            "dimension build finished"
        );
        Ok((
            DimensionSet {
                groups,
                subjects,
                rooms,
                teachers,
            },
            report,
        ))
    }

    pub(crate) fn decode_timetable<'a>(
        &self,
        records: &'a [TimetableRecord],
        report: &mut BuildReport,
    ) -> Result<Vec<Decoded<'a, TimetableRecord>>, BuildError> {
        self.decode_records(records, |r| (r.row, r.sheet_name.as_str()), report)
    }

    pub(crate) fn decode_teaching_load<'a>(
        &self,
        records: &'a [TeachingLoadRecord],
        report: &mut BuildReport,
    ) -> Result<Vec<Decoded<'a, TeachingLoadRecord>>, BuildError> {
        self.decode_records(records, |r| (r.row, r.sheet_name.as_str()), report)
    }

    /// Pair every record with its decoded sheet label; records whose label
    /// does not decode are skipped or fail the build per [`LabelPolicy`].
    fn decode_records<'a, T>(
        &self,
        records: &'a [T],
        label: impl Fn(&T) -> (usize, &str),
        report: &mut BuildReport,
    ) -> Result<Vec<Decoded<'a, T>>, BuildError> {
        let mut decoded = Vec::with_capacity(records.len());
        for record in records {
            let (row, sheet_name) = label(record);
            if let Some(context) = self.decode(row, sheet_name, report)? {
                decoded.push((context, record));
            }
        }
        Ok(decoded)
    }

    /// Decode a record's sheet label under the configured [`LabelPolicy`].
    ///
    /// `Ok(None)` means the row was skipped and recorded in `report`.
    fn decode(
        &self,
        row: usize,
        sheet_name: &str,
        report: &mut BuildReport,
    ) -> Result<Option<CourseContext>, BuildError> {
        match decode_label(sheet_name) {
            Ok(context) => Ok(Some(context)),
            Err(source) => match self.options.label_policy {
                LabelPolicy::FailBatch => Err(BuildError::Label {
                    row,
                    sheet_name: sheet_name.to_string(),
                    source,
                }),
                LabelPolicy::SkipRow => {
                    warn!(
                        row,
                        sheet = sheet_name,
                        error = %source,
                        "skipping row with undecodable sheet label"
                    );
                    report.skipped.push(SkippedRow {
                        row,
                        sheet_name: sheet_name.to_string(),
                        reason: source.to_string(),
                    });
                    Ok(None)
                }
            },
        }
    }
}

/// All four dimension tables of one build.
#[derive(Debug, Clone, Default)]
pub struct DimensionSet {
    pub groups: DimensionTable<GroupRow>,
    pub subjects: DimensionTable<SubjectRow>,
    pub rooms: DimensionTable<RoomRow>,
    pub teachers: DimensionTable<TeacherRow>,
}
