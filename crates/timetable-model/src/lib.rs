pub mod context;
pub mod diagnostics;
pub mod dimension;
pub mod error;
pub mod options;
pub mod records;

pub use context::{CourseContext, DEFAULT_SPECIALTY};
pub use diagnostics::{BuildReport, DiagnosticKind, KeyCollision, SelfStudyRow, SkippedRow};
pub use dimension::{
    DimensionKind, DimensionRow, DimensionTable, GroupRow, RoomRow, SubjectRow, SubjectType,
    TeacherRow, hyphenate,
};
pub use error::{LabelError, ModelError};
pub use options::{CollisionPolicy, LabelPolicy, PipelineOptions};
pub use records::{TeachingLoadRecord, TimetableRecord};
