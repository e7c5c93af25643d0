use timetable_model::{
    BuildReport, DimensionTable, SelfStudyRow, SubjectRow, SubjectType, TeachingLoadRecord,
    TimetableRecord,
};
use timetable_normalization::derive_subject_types;
use timetable_normalization::subjects::NULL_MARKER;
use tracing::{info, warn};

use super::{Decoded, DimensionBuilder};
use crate::dedupe::insert_deduped;
use crate::error::BuildError;

impl DimensionBuilder {
    /// Subject rows from the timetable, typed by its class-type column.
    pub fn build_timetable_subjects(
        &self,
        records: &[TimetableRecord],
        report: &mut BuildReport,
    ) -> Result<DimensionTable<SubjectRow>, BuildError> {
        let decoded = self.decode_timetable(records, report)?;
        let mut table = DimensionTable::new();
        self.extend_timetable_subjects(&mut table, &decoded, report)?;
        info!(rows = table.len(), "built timetable subject dimension");
        Ok(table)
    }

    /// Subject rows from the teaching load, one per taught class type.
    pub fn build_teaching_load_subjects(
        &self,
        records: &[TeachingLoadRecord],
        report: &mut BuildReport,
    ) -> Result<DimensionTable<SubjectRow>, BuildError> {
        let decoded = self.decode_teaching_load(records, report)?;
        let mut table = DimensionTable::new();
        self.extend_teaching_load_subjects(&mut table, &decoded, report)?;
        info!(rows = table.len(), "built teaching-load subject dimension");
        Ok(table)
    }

    pub(crate) fn extend_timetable_subjects(
        &self,
        table: &mut DimensionTable<SubjectRow>,
        records: &[Decoded<'_, TimetableRecord>],
        report: &mut BuildReport,
    ) -> Result<(), BuildError> {
        for (context, record) in records {
            let row = SubjectRow {
                context: context.clone(),
                subject_full_name: self
                    .canonicalizers
                    .subjects
                    .canonicalize_cell(record.subject.as_deref()),
                subject_type: SubjectType::from(record.class_type.as_deref().unwrap_or(NULL_MARKER)),
            };
            insert_deduped(table, row, self.options.collision_policy, report)?;
        }
        Ok(())
    }

    pub(crate) fn extend_teaching_load_subjects(
        &self,
        table: &mut DimensionTable<SubjectRow>,
        records: &[Decoded<'_, TeachingLoadRecord>],
        report: &mut BuildReport,
    ) -> Result<(), BuildError> {
        for (context, record) in records {
            let subject_full_name = self
                .canonicalizers
                .subjects
                .canonicalize_cell(record.subject.as_deref());

            let types = derive_subject_types(record);
            if types == [SubjectType::SelfStudy] {
                warn!(
                    row = record.row,
                    sheet = %record.sheet_name,
                    "no positive hours, recording subject as self-study"
                );
                report.self_study.push(SelfStudyRow {
                    row: record.row,
                    sheet_name: record.sheet_name.clone(),
                    subject_full_name: subject_full_name.clone(),
                });
            }

            for subject_type in types {
                let row = SubjectRow {
                    context: context.clone(),
                    subject_full_name: subject_full_name.clone(),
                    subject_type,
                };
                insert_deduped(table, row, self.options.collision_policy, report)?;
            }
        }
        Ok(())
    }
}
