//! Pairwise Levenshtein scan over a string vocabulary.
//!
//! The scan is quadratic in the number of distinct inputs. It runs offline
//! against raw or pre-correction vocabularies to find variants that should
//! become new correction-table entries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use rapidfuzz::distance::levenshtein;
use serde::{Deserialize, Serialize};

/// Two inputs within the distance threshold of each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearDuplicate {
    pub a: String,
    pub b: String,
    /// Insert/delete/substitute distance counted in characters.
    pub distance: usize,
}

/// Every pair of distinct inputs with `0 < distance <= threshold`.
///
/// Repeated inputs are scanned once, at their first position. Pairs keep
/// scan order (`a` precedes `b` in the input) and are stably sorted by
/// ascending distance.
pub fn find_near_duplicates<S: AsRef<str>>(strings: &[S], threshold: usize) -> Vec<NearDuplicate> {
    let mut distinct: Vec<&str> = Vec::with_capacity(strings.len());
    for s in strings {
        let s = s.as_ref();
        if !distinct.contains(&s) {
            distinct.push(s);
        }
    }

    let mut pairs = Vec::new();
    for (i, a) in distinct.iter().enumerate() {
        for b in &distinct[i + 1..] {
            let distance = levenshtein::distance(a.chars(), b.chars());
            if distance > 0 && distance <= threshold {
                pairs.push(NearDuplicate {
                    a: (*a).to_string(),
                    b: (*b).to_string(),
                    distance,
                });
            }
        }
    }
    pairs.sort_by_key(|pair| pair.distance);
    tracing::debug!(
        inputs = distinct.len(),
        threshold,
        pairs = pairs.len(),
        "near-duplicate scan finished"
    );
    pairs
}

/// A labelled scan result, ready for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearDuplicateReport {
    /// What vocabulary was scanned, e.g. `rooms`.
    pub vocabulary: String,
    pub threshold: usize,
    pub pairs: Vec<NearDuplicate>,
}

impl NearDuplicateReport {
    pub fn scan<S: AsRef<str>>(vocabulary: impl Into<String>, strings: &[S], threshold: usize) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            threshold,
            pairs: find_near_duplicates(strings, threshold),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Text table of the pairs for terminal review.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec!["A", "B", "Distance"]);
        for pair in &self.pairs {
            table.add_row(vec![
                pair.a.clone(),
                pair.b.clone(),
                pair.distance.to_string(),
            ]);
        }
        if let Some(column) = table.column_mut(2) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        format!(
            "{} near-duplicates (threshold {}): {}\n{table}",
            self.vocabulary,
            self.threshold,
            self.pairs.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_input_collapses() {
        let pairs = find_near_duplicates(&["kitten", "sitting", "kitten"], 3);
        assert_eq!(
            pairs,
            vec![NearDuplicate {
                a: "kitten".to_string(),
                b: "sitting".to_string(),
                distance: 3,
            }]
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(find_near_duplicates(&["kitten", "sitting"], 2).is_empty());
        assert_eq!(find_near_duplicates(&["kitten", "sitting"], 3).len(), 1);
    }

    #[test]
    fn distance_counts_characters() {
        let pairs = find_near_duplicates(&["żółw", "zolw"], 3);
        assert_eq!(pairs[0].distance, 3);
    }

    #[test]
    fn pairs_sorted_by_distance_then_scan_order() {
        let pairs = find_near_duplicates(&["abcd", "abxy", "abce", "abcf"], 2);
        let got: Vec<(&str, &str, usize)> = pairs
            .iter()
            .map(|p| (p.a.as_str(), p.b.as_str(), p.distance))
            .collect();
        assert_eq!(
            got,
            vec![
                ("abcd", "abce", 1),
                ("abcd", "abcf", 1),
                ("abce", "abcf", 1),
                ("abcd", "abxy", 2),
                ("abxy", "abce", 2),
                ("abxy", "abcf", 2),
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        let empty: [&str; 0] = [];
        assert!(find_near_duplicates(&empty, 3).is_empty());
    }
}
