//! Diagnostics collected while building dimensions.
//!
//! None of these stop a build under the default options; they are the list
//! of rows a curator should look at before the next correction-table update.

use serde::{Deserialize, Serialize};

use crate::dimension::DimensionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    SelfStudy,
    SkippedRow,
    KeyCollision,
}

/// A teaching-load row with no positive hours, emitted as `self-study`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfStudyRow {
    pub row: usize,
    pub sheet_name: String,
    pub subject_full_name: String,
}

/// A source row left out of the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row: usize,
    pub sheet_name: String,
    pub reason: String,
}

/// Two rows that share a composite identifier but differ in attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCollision {
    pub dimension: DimensionKind,
    pub key: String,
    /// Attribute values of the row that was kept.
    pub kept: Vec<String>,
    /// Attribute values of the row that was dropped.
    pub dropped: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub self_study: Vec<SelfStudyRow>,
    pub skipped: Vec<SkippedRow>,
    pub collisions: Vec<KeyCollision>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        match kind {
            DiagnosticKind::SelfStudy => self.self_study.len(),
            DiagnosticKind::SkippedRow => self.skipped.len(),
            DiagnosticKind::KeyCollision => self.collisions.len(),
        }
    }

    /// True when the build produced no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.self_study.is_empty() && self.skipped.is_empty() && self.collisions.is_empty()
    }

    pub fn merge(&mut self, other: BuildReport) {
        self.self_study.extend(other.self_study);
        self.skipped.extend(other.skipped);
        self.collisions.extend(other.collisions);
    }
}
