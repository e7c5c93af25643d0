#![deny(unsafe_code)]

pub mod csv;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod paths;
pub mod registry;
pub mod tables;

pub use crate::error::StandardsError;
pub use crate::paths::{STANDARDS_ENV_VAR, standards_root};
pub use crate::registry::{CorrectionRegistry, VerifySummary, load_default_corrections};
pub use crate::tables::{CorrectionTables, ExactTable, SubstitutionTable};
