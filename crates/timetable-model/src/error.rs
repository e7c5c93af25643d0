use thiserror::Error;

/// Contract violations of an encoded sheet label.
///
/// A label that does not decode cannot produce a course identifier, and every
/// composite key downstream is prefixed by one, so these are never coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label '{label}' has {found} components, expected 3 or 4")]
    Arity { label: String, found: usize },
    #[error("label '{label}' has an empty stage/semester component")]
    MissingSemester { label: String },
}

impl LabelError {
    pub fn label(&self) -> &str {
        match self {
            Self::Arity { label, .. } | Self::MissingSemester { label } => label,
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Label(#[from] LabelError),
    #[error("failed to parse pipeline options: {0}")]
    Options(#[from] toml::de::Error),
}
