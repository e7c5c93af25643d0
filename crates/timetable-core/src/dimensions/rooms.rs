use timetable_model::{BuildReport, DimensionTable, RoomRow, TimetableRecord};
use tracing::info;

use super::DimensionBuilder;
use crate::dedupe::insert_deduped;
use crate::error::BuildError;

impl DimensionBuilder {
    /// Room dimension: every distinct canonical room of the timetable.
    ///
    /// Rooms carry no course context, so sheet labels are not decoded here.
    pub fn build_rooms(
        &self,
        records: &[TimetableRecord],
        report: &mut BuildReport,
    ) -> Result<DimensionTable<RoomRow>, BuildError> {
        self.rooms_from(records, report)
    }

    pub(crate) fn rooms_from<'a>(
        &self,
        records: impl IntoIterator<Item = &'a TimetableRecord>,
        report: &mut BuildReport,
    ) -> Result<DimensionTable<RoomRow>, BuildError> {
        let mut table = DimensionTable::new();
        for record in records {
            for room_name in self
                .canonicalizers
                .rooms
                .canonicalize_cell(record.room.as_deref())
            {
                insert_deduped(
                    &mut table,
                    RoomRow { room_name },
                    self.options.collision_policy,
                    report,
                )?;
            }
        }
        info!(rows = table.len(), "built room dimension");
        Ok(table)
    }
}
