use std::collections::HashSet;

use timetable_model::{BuildReport, DimensionTable, TeacherRow, TeachingLoadRecord};
use timetable_normalization::split_teachers;
use tracing::info;

use super::DimensionBuilder;
use crate::dedupe::insert_deduped;
use crate::error::BuildError;

/// Raw teacher entries of the teaching load, lecturers first, each listed
/// once in first-occurrence order.
pub fn teacher_entries<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a TeachingLoadRecord> + Clone,
{
    let lecturers = records
        .clone()
        .into_iter()
        .flat_map(|r| split_teachers(r.lecturers.as_deref()));
    let practice = records
        .into_iter()
        .flat_map(|r| split_teachers(r.practice_teachers.as_deref()));

    let mut seen = HashSet::new();
    lecturers
        .chain(practice)
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

impl DimensionBuilder {
    /// Teacher dimension over both teacher columns of the teaching load.
    ///
    /// Entries whose canonical name is empty (null cells, bare artifacts)
    /// are left out.
    pub fn build_teachers(
        &self,
        records: &[TeachingLoadRecord],
        report: &mut BuildReport,
    ) -> Result<DimensionTable<TeacherRow>, BuildError> {
        self.teachers_from(records, report)
    }

    pub(crate) fn teachers_from<'a, I>(
        &self,
        records: I,
        report: &mut BuildReport,
    ) -> Result<DimensionTable<TeacherRow>, BuildError>
    where
        I: IntoIterator<Item = &'a TeachingLoadRecord> + Clone,
    {
        let mut table = DimensionTable::new();
        for entry in teacher_entries(records) {
            let teacher = self.canonicalizers.teachers.canonicalize(&entry);
            if teacher.full_name.is_empty() {
                continue;
            }
            let row = TeacherRow {
                title: teacher.title,
                full_name: teacher.full_name,
            };
            insert_deduped(&mut table, row, self.options.collision_policy, report)?;
        }
        info!(rows = table.len(), "built teacher dimension");
        Ok(table)
    }
}
