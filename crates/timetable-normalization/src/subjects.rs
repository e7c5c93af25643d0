//! Subject name canonicalization and subject-type derivation.

use std::sync::LazyLock;

use regex::Regex;
use timetable_model::{SubjectType, TeachingLoadRecord};
use timetable_standards::{CorrectionTables, ExactTable};

use crate::rewrite::{FnStage, RewritePipeline, TableStage};
use crate::rooms::collapse_whitespace;

pub const LOWERCASE: &str = "lowercase";
pub const STRIP_PUNCTUATION: &str = "strip_punctuation";
pub const SPELLING: &str = "spelling";

/// Textual rendering of a null cell.
pub const NULL_MARKER: &str = "nan";

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9ąćęłńóśźżĄĆĘŁŃÓŚŹŻ\s']+").expect("valid subject charset regex")
});

fn lowercase(subject: &str) -> String {
    subject.to_lowercase()
}

fn strip_punctuation(subject: &str) -> String {
    collapse_whitespace(&DISALLOWED_RE.replace_all(subject, " "))
}

/// Canonicalizes subject names.
#[derive(Debug, Clone)]
pub struct SubjectCanonicalizer {
    pipeline: RewritePipeline,
}

impl SubjectCanonicalizer {
    pub fn new(spelling: ExactTable) -> Self {
        let pipeline = RewritePipeline::new()
            .with_stage(FnStage::new(LOWERCASE, "lower-case", lowercase))
            .with_stage(FnStage::new(
                STRIP_PUNCTUATION,
                "replace characters outside letters, digits, whitespace and apostrophe",
                strip_punctuation,
            ))
            .with_stage(TableStage::new(
                SPELLING,
                "known misspellings and variants",
                spelling,
            ));
        Self { pipeline }
    }

    pub fn from_tables(tables: &CorrectionTables) -> Self {
        Self::new(tables.subjects.clone())
    }

    pub fn pipeline(&self) -> &RewritePipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut RewritePipeline {
        &mut self.pipeline
    }

    pub fn canonicalize(&self, subject: &str) -> String {
        self.pipeline.apply(subject)
    }

    /// Canonicalize a cell; a null cell renders as [`NULL_MARKER`].
    pub fn canonicalize_cell(&self, cell: Option<&str>) -> String {
        self.canonicalize(cell.unwrap_or(NULL_MARKER))
    }

    pub fn pre_correction(&self, subject: &str) -> String {
        self.pipeline.without(SPELLING).apply(subject)
    }
}

/// Subject types taught in a teaching-load row.
///
/// One type per positive hours column, in the order lecture, practice,
/// laboratory, project. A row with no positive hours yields a single
/// [`SubjectType::SelfStudy`]; callers report those rows for review.
pub fn derive_subject_types(record: &TeachingLoadRecord) -> Vec<SubjectType> {
    let mut types = Vec::with_capacity(4);
    if record.has_lecture() {
        types.push(SubjectType::Lecture);
    }
    if record.has_practice() {
        types.push(SubjectType::Practice);
    }
    if record.has_laboratory() {
        types.push(SubjectType::Laboratory);
    }
    if record.has_project() {
        types.push(SubjectType::Project);
    }
    if types.is_empty() {
        types.push(SubjectType::SelfStudy);
    }
    types
}
