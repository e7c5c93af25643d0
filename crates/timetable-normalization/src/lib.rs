//! Canonicalization of free-text timetable fields.
//!
//! Each field kind has a canonicalizer built from an ordered
//! [`RewritePipeline`] of named stages plus the correction tables loaded by
//! `timetable-standards`. Canonicalizers never fail: unknown values pass
//! through the rule stages and come out in their best-effort form.

pub mod groups;
pub mod label;
pub mod rewrite;
pub mod rooms;
pub mod subjects;
pub mod teachers;

pub use groups::GroupCanonicalizer;
pub use label::decode_label;
pub use rewrite::{FnStage, RewritePipeline, RewriteStage, StageMetadata, TableStage};
pub use rooms::RoomCanonicalizer;
pub use subjects::{SubjectCanonicalizer, derive_subject_types};
pub use teachers::{CanonicalTeacher, TeacherCanonicalizer, split_teachers};
