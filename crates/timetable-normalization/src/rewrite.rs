//! Ordered, named string rewrite stages.
//!
//! A canonicalizer is a [`RewritePipeline`]: a list of [`RewriteStage`]s run
//! in insertion order, each seeing the previous stage's output. Stages are
//! addressed by id so one can be switched off, which is how the
//! pre-correction vocabulary is produced (everything except the final
//! correction-table stage).

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use timetable_standards::ExactTable;

/// Metadata about a rewrite stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageMetadata {
    /// Unique stage identifier within a pipeline.
    pub id: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

impl StageMetadata {
    pub const fn new(id: &'static str, description: &'static str) -> Self {
        Self { id, description }
    }
}

/// A single string transformation.
pub trait RewriteStage: Send + Sync {
    fn metadata(&self) -> &StageMetadata;

    fn apply(&self, value: &str) -> String;
}

/// Stage backed by a plain function.
pub struct FnStage {
    metadata: StageMetadata,
    rewrite: fn(&str) -> String,
}

impl FnStage {
    pub const fn new(
        id: &'static str,
        description: &'static str,
        rewrite: fn(&str) -> String,
    ) -> Self {
        Self {
            metadata: StageMetadata::new(id, description),
            rewrite,
        }
    }
}

impl RewriteStage for FnStage {
    fn metadata(&self) -> &StageMetadata {
        &self.metadata
    }

    fn apply(&self, value: &str) -> String {
        (self.rewrite)(value)
    }
}

/// Stage that maps exact matches through a correction table.
pub struct TableStage {
    metadata: StageMetadata,
    table: ExactTable,
}

impl TableStage {
    pub fn new(id: &'static str, description: &'static str, table: ExactTable) -> Self {
        Self {
            metadata: StageMetadata::new(id, description),
            table,
        }
    }
}

impl RewriteStage for TableStage {
    fn metadata(&self) -> &StageMetadata {
        &self.metadata
    }

    fn apply(&self, value: &str) -> String {
        self.table.apply(value)
    }
}

/// Runs a set of stages in order.
#[derive(Clone, Default)]
pub struct RewritePipeline {
    stages: Vec<Arc<dyn RewriteStage>>,
    disabled: HashSet<&'static str>,
}

impl fmt::Debug for RewritePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewritePipeline")
            .field("stages", &self.stage_ids())
            .field("disabled", &self.disabled)
            .finish()
    }
}

impl RewritePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn with_stage(mut self, stage: impl RewriteStage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn disable_stage(&mut self, id: &'static str) {
        self.disabled.insert(id);
    }

    pub fn enable_stage(&mut self, id: &str) {
        self.disabled.remove(id);
    }

    pub fn is_stage_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }

    /// Copy of this pipeline with `id` switched off.
    pub fn without(&self, id: &'static str) -> Self {
        let mut pipeline = self.clone();
        pipeline.disable_stage(id);
        pipeline
    }

    /// Run every enabled stage.
    pub fn apply(&self, value: &str) -> String {
        let mut out = value.to_string();
        for stage in &self.stages {
            if self.is_stage_disabled(stage.metadata().id) {
                continue;
            }
            out = stage.apply(&out);
        }
        out
    }

    /// Run the stages up to and including `id`, ignoring the disabled set.
    pub fn apply_through(&self, value: &str, id: &str) -> String {
        let mut out = value.to_string();
        for stage in &self.stages {
            out = stage.apply(&out);
            if stage.metadata().id == id {
                break;
            }
        }
        out
    }

    pub fn stage_ids(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.metadata().id).collect()
    }

    pub fn stage_metadata(&self) -> Vec<&StageMetadata> {
        self.stages.iter().map(|s| s.metadata()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> RewritePipeline {
        RewritePipeline::new()
            .with_stage(FnStage::new("trim", "trim", |s| s.trim().to_string()))
            .with_stage(FnStage::new("upper", "upper-case", str::to_uppercase))
            .with_stage(FnStage::new("suffix", "append !", |s| format!("{s}!")))
    }

    #[test]
    fn stages_run_in_order() {
        assert_eq!(pipeline().apply("  ab "), "AB!");
    }

    #[test]
    fn disabled_stage_is_skipped() {
        let p = pipeline().without("upper");
        assert!(p.is_stage_disabled("upper"));
        assert_eq!(p.apply(" ab"), "ab!");
    }

    #[test]
    fn re_enabled_stage_runs_again() {
        let mut p = pipeline();
        p.disable_stage("suffix");
        p.enable_stage("suffix");
        assert_eq!(p.apply("x"), "X!");
    }

    #[test]
    fn apply_through_stops_after_named_stage() {
        assert_eq!(pipeline().apply_through(" ab ", "upper"), "AB");
    }

    #[test]
    fn table_stage_passes_unknown_through() {
        let stage = TableStage::new(
            "special_cases",
            "fixes",
            ExactTable::from_pairs([("a", "b")]),
        );
        assert_eq!(stage.apply("a"), "b");
        assert_eq!(stage.apply("c"), "c");
    }

    #[test]
    fn stage_ids_report_insertion_order() {
        assert_eq!(pipeline().stage_ids(), vec!["trim", "upper", "suffix"]);
    }
}
