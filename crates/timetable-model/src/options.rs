//! Configuration options for dimension building.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// What to do with a row whose sheet label does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Abort the whole build with the label error.
    #[default]
    FailBatch,
    /// Skip the row, log a warning and record it in the build report.
    SkipRow,
}

/// What to do when two distinct rows normalize to the same composite identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep the first row, log a warning and record the collision.
    #[default]
    Warn,
    /// Abort the build.
    Error,
}

/// Options controlling a dimension build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub label_policy: LabelPolicy,
    pub collision_policy: CollisionPolicy,
    /// Maximum edit distance reported when reviewing a vocabulary.
    pub near_duplicate_threshold: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            label_policy: LabelPolicy::FailBatch,
            collision_policy: CollisionPolicy::Warn,
            near_duplicate_threshold: 3,
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject any malformed label or key collision.
    pub fn strict() -> Self {
        Self {
            label_policy: LabelPolicy::FailBatch,
            collision_policy: CollisionPolicy::Error,
            ..Self::default()
        }
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn with_near_duplicate_threshold(mut self, threshold: usize) -> Self {
        self.near_duplicate_threshold = threshold;
        self
    }

    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ModelError> {
        Ok(toml::from_str(contents)?)
    }
}
