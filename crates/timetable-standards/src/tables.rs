//! In-memory correction tables.
//!
//! Two shapes cover every table: [`ExactTable`] maps a whole value to its
//! canonical form, [`SubstitutionTable`] rewrites substrings in a fixed order.

use std::collections::BTreeMap;

/// Exact-match lookup from a known malformed value to its canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExactTable {
    entries: BTreeMap<String, String>,
}

impl ExactTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs; a later pair with the same key replaces an earlier one.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, raw: &str) -> Option<&str> {
        self.entries.get(raw).map(String::as_str)
    }

    /// Map `raw` to its canonical form, passing unknown values through.
    pub fn apply(&self, raw: &str) -> String {
        self.get(raw).unwrap_or(raw).to_string()
    }

    pub fn insert(&mut self, raw: impl Into<String>, canonical: impl Into<String>) {
        self.entries.insert(raw.into(), canonical.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Distinct canonical values.
    pub fn canonical_values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.entries.values().map(String::as_str).collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}

/// Ordered substring rewrites. Each rule sees the output of the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    rules: Vec<(String, String)>,
}

impl SubstitutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            rules: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn apply(&self, value: &str) -> String {
        let mut out = value.to_string();
        for (pattern, replacement) in &self.rules {
            if pattern.is_empty() {
                continue;
            }
            out = out.replace(pattern.as_str(), replacement);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[(String, String)] {
        &self.rules
    }
}

/// Every correction table the canonicalizers consult.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionTables {
    /// Canonical room label per known malformed label.
    pub rooms: ExactTable,
    /// Canonical subject name per known misspelling.
    pub subjects: ExactTable,
    /// Canonical teacher name per known variant.
    pub teacher_names: ExactTable,
    /// Canonical spelling per academic title variant.
    pub teacher_titles: ExactTable,
    /// Academic title prefixes in match priority order.
    pub teacher_prefixes: Vec<String>,
    /// Substrings removed from (or rewritten in) teacher names.
    pub teacher_artifacts: SubstitutionTable,
    /// Title forced onto a teacher regardless of what was parsed.
    pub teacher_overrides: ExactTable,
    /// Cell-level rewrites applied to raw group lists.
    pub groups: SubstitutionTable,
}

impl CorrectionTables {
    /// Tables with no entries: every canonicalizer passes values through its
    /// rule stages only.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of entries per manifest role.
    pub fn entry_counts(&self) -> BTreeMap<String, usize> {
        BTreeMap::from([
            ("groups".to_string(), self.groups.len()),
            ("rooms".to_string(), self.rooms.len()),
            ("subjects".to_string(), self.subjects.len()),
            ("teacher_artifacts".to_string(), self.teacher_artifacts.len()),
            ("teacher_names".to_string(), self.teacher_names.len()),
            ("teacher_overrides".to_string(), self.teacher_overrides.len()),
            ("teacher_prefixes".to_string(), self.teacher_prefixes.len()),
            ("teacher_titles".to_string(), self.teacher_titles.len()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_table_passes_unknown_values_through() {
        let table = ExactTable::from_pairs([("8 CW", "hall 8 CW")]);
        assert_eq!(table.apply("8 CW"), "hall 8 CW");
        assert_eq!(table.apply("hall 9 CW"), "hall 9 CW");
    }

    #[test]
    fn substitutions_apply_in_order() {
        let table = SubstitutionTable::from_pairs([("L88", "L8"), ("L8", "G8")]);
        assert_eq!(table.apply("L88\nL2"), "G8\nL2");
    }

    #[test]
    fn empty_pattern_is_ignored() {
        let table = SubstitutionTable::from_pairs([("", "x")]);
        assert_eq!(table.apply("abc"), "abc");
    }

    #[test]
    fn canonical_values_are_distinct() {
        let table = ExactTable::from_pairs([("a", "x"), ("b", "x"), ("c", "y")]);
        assert_eq!(table.canonical_values(), vec!["x", "y"]);
    }
}
