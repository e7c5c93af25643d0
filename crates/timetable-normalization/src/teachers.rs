//! Teacher entry canonicalization into `(title, name)` pairs.
//!
//! Titles are recognized by prefix against an ordered list in which the
//! more specific spellings come first (`dr hab. inż.` before `dr hab.`
//! before `dr`). A prefix only counts when a name follows it.

use std::collections::HashSet;

use timetable_standards::{CorrectionTables, ExactTable, SubstitutionTable};

use crate::subjects::NULL_MARKER;

/// Title assigned to entries with no recognized title, typically
/// institutional units acting as the teacher of record.
pub const DEPARTMENT_TITLE: &str = "department";

/// A canonical teacher entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalTeacher {
    pub title: String,
    pub full_name: String,
}

/// Split a raw teacher cell on newlines and commas.
///
/// Entries are returned verbatim, first occurrence first, without repeats. A
/// null cell renders as the null marker so it flows through artifact removal
/// like any other textual `nan`.
pub fn split_teachers(cell: Option<&str>) -> Vec<String> {
    let cell = cell.unwrap_or(NULL_MARKER);
    let mut seen = HashSet::new();
    cell.split(['\n', ','])
        .filter(|entry| seen.insert(*entry))
        .map(str::to_string)
        .collect()
}

/// Canonicalizes teacher entries.
#[derive(Debug, Clone)]
pub struct TeacherCanonicalizer {
    prefixes: Vec<String>,
    names: ExactTable,
    artifacts: SubstitutionTable,
    titles: ExactTable,
    overrides: ExactTable,
}

impl TeacherCanonicalizer {
    pub fn new(
        prefixes: Vec<String>,
        names: ExactTable,
        artifacts: SubstitutionTable,
        titles: ExactTable,
        overrides: ExactTable,
    ) -> Self {
        Self {
            prefixes,
            names,
            artifacts,
            titles,
            overrides,
        }
    }

    pub fn from_tables(tables: &CorrectionTables) -> Self {
        Self::new(
            tables.teacher_prefixes.clone(),
            tables.teacher_names.clone(),
            tables.teacher_artifacts.clone(),
            tables.teacher_titles.clone(),
            tables.teacher_overrides.clone(),
        )
    }

    /// Split a trimmed entry into its title prefix and the remaining name.
    pub fn extract_title<'a>(&self, entry: &'a str) -> (Option<&'a str>, &'a str) {
        for prefix in &self.prefixes {
            let Some(rest) = entry.strip_prefix(prefix.as_str()) else {
                continue;
            };
            let name = rest.trim();
            if !name.is_empty() {
                return (Some(entry[..prefix.len()].trim()), name);
            }
        }
        (None, entry)
    }

    /// Name with artifacts removed but without the name correction table.
    /// Used for vocabulary review.
    pub fn pre_correction(&self, entry: &str) -> String {
        let (_, name) = self.extract_title(entry.trim());
        self.artifacts.apply(name).trim().to_string()
    }

    pub fn canonicalize(&self, entry: &str) -> CanonicalTeacher {
        let (title, name) = self.extract_title(entry.trim());

        let name = self.artifacts.apply(&self.names.apply(name));
        let name = name.trim();

        let title = title
            .map(|t| self.titles.apply(t).trim().to_string())
            .filter(|t| !t.is_empty());

        let title = match (self.overrides.get(name), title) {
            (Some(forced), _) => forced.to_string(),
            (None, Some(title)) => title,
            (None, None) => DEPARTMENT_TITLE.to_string(),
        };

        CanonicalTeacher {
            title,
            full_name: name.to_string(),
        }
    }

    /// Canonicalize every entry of a raw cell.
    pub fn canonicalize_cell(&self, cell: Option<&str>) -> Vec<CanonicalTeacher> {
        split_teachers(cell)
            .iter()
            .map(|entry| self.canonicalize(entry))
            .collect()
    }
}
