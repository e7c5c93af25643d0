//! Dimension building for timetable and teaching-load extracts.
//!
//! The crate emits `tracing` events and leaves subscriber setup to the
//! embedding application:
//!
//! - `warn`: self-study rows, skipped labels, identifier collisions
//! - `info`: dimension sizes
//! - `debug`: empty-day filtering

pub mod dedupe;
pub mod dimensions;
pub mod error;
pub mod frame;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod vocabulary;

pub use dedupe::insert_deduped;
pub use dimensions::{Canonicalizers, DimensionBuilder, DimensionSet, teacher_entries};
pub use error::BuildError;
pub use frame::{drop_empty_days, require_columns};
pub use output::dimension_to_dataframe;
pub use pipeline::{build_dimensions, review_frames};
pub use records::{teaching_load_records, timetable_records};
pub use vocabulary::{Vocabulary, extract_vocabulary, review_vocabulary};
