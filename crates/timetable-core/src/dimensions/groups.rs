use timetable_model::{BuildReport, DimensionTable, GroupRow, TimetableRecord};
use tracing::info;

use super::{Decoded, DimensionBuilder};
use crate::dedupe::insert_deduped;
use crate::error::BuildError;

impl DimensionBuilder {
    /// Group dimension: one row per group listed in each timetable cell.
    pub fn build_groups(
        &self,
        records: &[TimetableRecord],
        report: &mut BuildReport,
    ) -> Result<DimensionTable<GroupRow>, BuildError> {
        let decoded = self.decode_timetable(records, report)?;
        self.groups_from(&decoded, report)
    }

    pub(crate) fn groups_from(
        &self,
        records: &[Decoded<'_, TimetableRecord>],
        report: &mut BuildReport,
    ) -> Result<DimensionTable<GroupRow>, BuildError> {
        let mut table = DimensionTable::new();
        for (context, record) in records {
            let names = self
                .canonicalizers
                .groups
                .canonicalize_cell(record.group.as_deref());
            for group_name in names {
                let row = GroupRow {
                    context: context.clone(),
                    group_name,
                };
                insert_deduped(&mut table, row, self.options.collision_policy, report)?;
            }
        }
        info!(rows = table.len(), "built group dimension");
        Ok(table)
    }
}
