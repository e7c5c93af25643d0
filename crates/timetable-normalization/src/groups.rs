//! Group list canonicalization.
//!
//! A group cell lists one group per line. Cell-level corrections run on the
//! whole cell first; only then is it split and any remaining null-marker entry
//! replaced by a positional placeholder.

use timetable_standards::{CorrectionTables, SubstitutionTable};

use crate::subjects::NULL_MARKER;

/// Prefix of synthesized placeholder group names.
pub const PLACEHOLDER_PREFIX: &str = "L";

/// Placeholder name for an unnamed group at `index` within its cell.
pub fn placeholder_group(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}")
}

/// Canonicalizes group cells into group names.
#[derive(Debug, Clone)]
pub struct GroupCanonicalizer {
    corrections: SubstitutionTable,
}

impl GroupCanonicalizer {
    pub fn new(corrections: SubstitutionTable) -> Self {
        Self { corrections }
    }

    pub fn from_tables(tables: &CorrectionTables) -> Self {
        Self::new(tables.groups.clone())
    }

    /// Apply the substring corrections to a whole raw cell.
    pub fn correct_cell(&self, cell: &str) -> String {
        self.corrections.apply(cell)
    }

    /// Resolve one split entry; a null-marker entry becomes the placeholder
    /// for `index`.
    pub fn resolve_entry(&self, entry: &str, index: usize) -> String {
        if entry == NULL_MARKER {
            placeholder_group(index)
        } else {
            entry.to_string()
        }
    }

    /// Group names listed in a raw cell; a null cell renders as the null
    /// marker.
    pub fn canonicalize_cell(&self, cell: Option<&str>) -> Vec<String> {
        let corrected = self.correct_cell(cell.unwrap_or(NULL_MARKER));
        corrected
            .split('\n')
            .enumerate()
            .map(|(index, entry)| self.resolve_entry(entry, index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonicalizer() -> GroupCanonicalizer {
        GroupCanonicalizer::new(SubstitutionTable::from_pairs([("L88", "L8"), ("nan", "L1")]))
    }

    #[test]
    fn splits_on_newlines() {
        assert_eq!(
            canonicalizer().canonicalize_cell(Some("L1\nL2\nL3")),
            vec!["L1", "L2", "L3"]
        );
    }

    #[test]
    fn null_marker_becomes_default_group() {
        assert_eq!(
            canonicalizer().canonicalize_cell(Some("G1\nnan\nG3")),
            vec!["G1", "L1", "G3"]
        );
        assert_eq!(canonicalizer().canonicalize_cell(None), vec!["L1"]);
    }

    #[test]
    fn mistyped_code_is_corrected() {
        assert_eq!(
            canonicalizer().canonicalize_cell(Some("L88\nL9")),
            vec!["L8", "L9"]
        );
    }

    #[test]
    fn positional_placeholder_without_cell_correction() {
        let groups = GroupCanonicalizer::new(SubstitutionTable::new());
        assert_eq!(
            groups.canonicalize_cell(Some("G1\nnan\nnan")),
            vec!["G1", "L1", "L2"]
        );
        assert_eq!(groups.resolve_entry("nan", 7), "L7");
        assert_eq!(groups.resolve_entry("G7", 7), "G7");
    }
}
