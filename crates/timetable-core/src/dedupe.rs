//! Insertion into dimension tables with collision handling.
//!
//! Rows equal in every attribute collapse silently, keeping the first. Two
//! rows that only share the composite identifier are a data-quality defect:
//! the first row stays, and the collision is reported or rejected depending
//! on [`CollisionPolicy`].

use timetable_model::{BuildReport, CollisionPolicy, DimensionRow, DimensionTable, KeyCollision};
use tracing::warn;

use crate::error::BuildError;

/// Insert `row`, resolving an identifier clash per `policy`.
///
/// Returns `true` when the row was added.
pub fn insert_deduped<R: DimensionRow>(
    table: &mut DimensionTable<R>,
    row: R,
    policy: CollisionPolicy,
    report: &mut BuildReport,
) -> Result<bool, BuildError> {
    let key = row.key();
    let Some(existing) = table.get(&key) else {
        table.insert(row);
        return Ok(true);
    };
    if *existing == row {
        return Ok(false);
    }

    let collision = KeyCollision {
        dimension: R::KIND,
        key,
        kept: existing.values(),
        dropped: row.values(),
    };
    match policy {
        CollisionPolicy::Warn => {
            warn!(
                dimension = %collision.dimension,
                key = %collision.key,
                "rows with different attributes share an identifier; keeping the first"
            );
            report.collisions.push(collision);
            Ok(false)
        }
        CollisionPolicy::Error => Err(BuildError::KeyCollision {
            dimension: collision.dimension,
            key: collision.key,
        }),
    }
}
