//! Room label canonicalization.
//!
//! Room cells hold free text such as `"s. 8 CW, lab 143"`. Each comma
//! separated item runs through the stages below in order; the `stray_l`
//! stage only handles `L` markers left over after the hall and lab prefixes
//! were normalized, so the order is load-bearing.

use std::sync::LazyLock;

use regex::Regex;
use timetable_standards::{CorrectionTables, ExactTable};

use crate::rewrite::{FnStage, RewritePipeline, TableStage};

pub const TRIM: &str = "trim";
pub const HALL_PREFIX: &str = "hall_prefix";
pub const LAB_PREFIX: &str = "lab_prefix";
pub const STRAY_L: &str = "stray_l";
pub const COLLAPSE_WHITESPACE: &str = "collapse_whitespace";
pub const SPECIAL_CASES: &str = "special_cases";

static HALL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(hall|s\.|sala|sale:)\s*").expect("valid hall prefix regex")
});
static LAB_DOTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^lab\.{2,}").expect("valid lab dots regex"));
static LAB_SPACING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lab\.*").expect("valid lab spacing regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

fn trim(room: &str) -> String {
    room.trim().to_string()
}

fn hall_prefix(room: &str) -> String {
    HALL_PREFIX_RE.replace_all(room, "hall ").into_owned()
}

fn lab_prefix(room: &str) -> String {
    let room = room.replace("lab", "lab.").replace("l.", "lab.");
    let room = LAB_DOTS_RE.replace(&room, "lab.");
    LAB_SPACING_RE.replace_all(&room, "lab. ").into_owned()
}

fn stray_l(room: &str) -> String {
    if !room.contains('L') {
        return room.to_string();
    }
    let stripped = room.replace('L', "");
    if room.starts_with("hall") {
        stripped
    } else {
        format!("hall {stripped}")
    }
}

pub(crate) fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RE.replace_all(value, " ").trim().to_string()
}

/// Canonicalizes room labels.
#[derive(Debug, Clone)]
pub struct RoomCanonicalizer {
    pipeline: RewritePipeline,
}

impl RoomCanonicalizer {
    pub fn new(special_cases: ExactTable) -> Self {
        let pipeline = RewritePipeline::new()
            .with_stage(FnStage::new(TRIM, "trim surrounding whitespace", trim))
            .with_stage(FnStage::new(
                HALL_PREFIX,
                "normalize hall/s./sala/sale: to 'hall '",
                hall_prefix,
            ))
            .with_stage(FnStage::new(
                LAB_PREFIX,
                "normalize lab/l. to 'lab. '",
                lab_prefix,
            ))
            .with_stage(FnStage::new(
                STRAY_L,
                "resolve residual 'L' hall markers",
                stray_l,
            ))
            .with_stage(FnStage::new(
                COLLAPSE_WHITESPACE,
                "collapse whitespace runs",
                collapse_whitespace,
            ))
            .with_stage(TableStage::new(
                SPECIAL_CASES,
                "known malformed room labels",
                special_cases,
            ));
        Self { pipeline }
    }

    pub fn from_tables(tables: &CorrectionTables) -> Self {
        Self::new(tables.rooms.clone())
    }

    pub fn pipeline(&self) -> &RewritePipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut RewritePipeline {
        &mut self.pipeline
    }

    /// Canonicalize a single room label.
    pub fn canonicalize(&self, room: &str) -> String {
        self.pipeline.apply(room)
    }

    /// Canonical form without the correction table, for vocabulary review.
    pub fn pre_correction(&self, room: &str) -> String {
        self.pipeline.without(SPECIAL_CASES).apply(room)
    }

    /// Split a raw room cell into canonical labels.
    ///
    /// Newlines are removed before splitting on commas. A null cell holds no
    /// rooms, and items that canonicalize to nothing are dropped.
    pub fn canonicalize_cell(&self, cell: Option<&str>) -> Vec<String> {
        split_cell(cell, |item| self.canonicalize(item))
    }

    pub fn pre_correction_cell(&self, cell: Option<&str>) -> Vec<String> {
        let pipeline = self.pipeline.without(SPECIAL_CASES);
        split_cell(cell, |item| pipeline.apply(item))
    }
}

fn split_cell(cell: Option<&str>, canonicalize: impl Fn(&str) -> String) -> Vec<String> {
    let Some(cell) = cell else {
        return Vec::new();
    };
    cell.replace('\n', "")
        .split(',')
        .map(canonicalize)
        .filter(|room| !room.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonicalizer() -> RoomCanonicalizer {
        RoomCanonicalizer::new(ExactTable::from_pairs([
            ("8 CW", "hall 8 CW"),
            ("lab. 143", "lab. 143 CW"),
        ]))
    }

    #[test]
    fn hall_variants_share_prefix() {
        let rooms = canonicalizer();
        assert_eq!(rooms.canonicalize("s. 12 CW"), "hall 12 CW");
        assert_eq!(rooms.canonicalize("Sala 12 CW"), "hall 12 CW");
        assert_eq!(rooms.canonicalize("sale:12 CW"), "hall 12 CW");
        assert_eq!(rooms.canonicalize("HALL   12 CW"), "hall 12 CW");
    }

    #[test]
    fn lab_variants_converge() {
        let rooms = canonicalizer();
        assert_eq!(rooms.canonicalize("lab 5"), "lab. 5");
        assert_eq!(rooms.canonicalize("l.5"), "lab. 5");
        assert_eq!(rooms.canonicalize("lab...5"), "lab. 5");
        assert_eq!(rooms.canonicalize("lab.5"), "lab. 5");
    }

    #[test]
    fn capital_l_marks_a_hall() {
        let rooms = canonicalizer();
        assert_eq!(rooms.canonicalize("L.5"), "hall .5");
        assert_eq!(rooms.canonicalize("12L CW"), "hall 12 CW");
        assert_eq!(rooms.canonicalize("hall L12"), "hall 12");
    }

    #[test]
    fn special_cases_apply_last() {
        let rooms = canonicalizer();
        assert_eq!(rooms.canonicalize(" 8   CW "), "hall 8 CW");
        assert_eq!(rooms.canonicalize("lab 143"), "lab. 143 CW");
        assert_eq!(rooms.pre_correction("lab 143"), "lab. 143");
    }

    #[test]
    fn cell_splits_on_commas_and_strips_newlines() {
        let rooms = canonicalizer();
        assert_eq!(
            rooms.canonicalize_cell(Some("8 CW,\nlab 143")),
            vec!["hall 8 CW".to_string(), "lab. 143 CW".to_string()]
        );
        assert_eq!(
            rooms.pre_correction_cell(Some("8 CW,lab 143")),
            vec!["8 CW".to_string(), "lab. 143".to_string()]
        );
    }

    #[test]
    fn empty_and_null_cells_yield_nothing() {
        let rooms = canonicalizer();
        assert!(rooms.canonicalize_cell(None).is_empty());
        assert!(rooms.canonicalize_cell(Some(" , ")).is_empty());
    }

    #[test]
    fn stages_are_listed_in_order() {
        assert_eq!(
            canonicalizer().pipeline().stage_ids(),
            vec![
                TRIM,
                HALL_PREFIX,
                LAB_PREFIX,
                STRAY_L,
                COLLAPSE_WHITESPACE,
                SPECIAL_CASES
            ]
        );
    }
}
