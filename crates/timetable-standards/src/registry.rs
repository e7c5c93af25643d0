#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::csv::{parse_exact_csv, parse_list_csv, parse_substitution_csv};
use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::manifest::{Manifest, ManifestFile, Pins};
use crate::paths::standards_root;
use crate::tables::CorrectionTables;

const MANIFEST_SCHEMA: &str = "timetable.corrections-manifest";

const REQUIRED_ROLES: &[&str] = &[
    "groups",
    "rooms",
    "subjects",
    "teacher_artifacts",
    "teacher_names",
    "teacher_overrides",
    "teacher_prefixes",
    "teacher_titles",
];

const ALLOWED_KINDS: &[&str] = &["csv"];

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub standards_dir: PathBuf,
    pub manifest_pins: Pins,
    pub file_count: usize,
    /// Entry count per table role.
    pub entries: BTreeMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct CorrectionRegistry {
    pub manifest: Manifest,
    pub files: Vec<ManifestFile>,
    pub tables: CorrectionTables,
}

impl CorrectionRegistry {
    /// Check every table against the manifest hashes, then parse them.
    ///
    /// Fails on an unknown schema, missing or duplicated roles, a hash
    /// mismatch, or any file under `standards_dir` the manifest does not list.
    pub fn verify_and_load(standards_dir: &Path) -> Result<(Self, VerifySummary), StandardsError> {
        let manifest = load_manifest(&standards_dir.join("manifest.toml"))?;

        validate_manifest(&manifest, standards_dir)?;

        let mut files = manifest.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        for file in &files {
            verify_file(standards_dir, file)?;
        }

        let role = |name: &str| resolve_role_path(standards_dir, &files, name);
        let tables = CorrectionTables {
            rooms: parse_exact_csv(&role("rooms")?, "raw", "canonical")?,
            subjects: parse_exact_csv(&role("subjects")?, "raw", "canonical")?,
            teacher_names: parse_exact_csv(&role("teacher_names")?, "raw", "canonical")?,
            teacher_titles: parse_exact_csv(&role("teacher_titles")?, "raw", "canonical")?,
            teacher_prefixes: parse_list_csv(&role("teacher_prefixes")?, "prefix")?,
            teacher_artifacts: parse_substitution_csv(
                &role("teacher_artifacts")?,
                "artifact",
                "replacement",
            )?,
            teacher_overrides: parse_exact_csv(&role("teacher_overrides")?, "name", "title")?,
            groups: parse_substitution_csv(&role("groups")?, "pattern", "replacement")?,
        };

        let summary = VerifySummary {
            standards_dir: standards_dir.to_path_buf(),
            manifest_pins: manifest.pins.clone(),
            file_count: files.len(),
            entries: tables.entry_counts(),
        };
        debug!(
            dataset = %summary.manifest_pins.dataset,
            revision = %summary.manifest_pins.revision,
            files = summary.file_count,
            "correction tables verified"
        );

        Ok((
            Self {
                manifest,
                files,
                tables,
            },
            summary,
        ))
    }
}

/// Verify and load the tables from [`standards_root`].
pub fn load_default_corrections() -> Result<CorrectionTables, StandardsError> {
    let (registry, _) = CorrectionRegistry::verify_and_load(&standards_root())?;
    Ok(registry.tables)
}

fn load_manifest(path: &Path) -> Result<Manifest, StandardsError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest, standards_dir: &Path) -> Result<(), StandardsError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(StandardsError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    let mut manifest_paths: BTreeSet<PathBuf> = BTreeSet::new();

    for file in &manifest.files {
        if !roles.insert(file.role.as_str()) {
            return Err(StandardsError::DuplicateRole {
                role: file.role.clone(),
            });
        }

        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(StandardsError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }

        validate_sha(&file.sha256, &file.path)?;

        let path = validate_path(&file.path)?;
        manifest_paths.insert(normalize_path(&path));
    }

    for role in REQUIRED_ROLES {
        if !roles.contains(role) {
            return Err(StandardsError::MissingRole {
                role: (*role).to_string(),
            });
        }
    }

    for path in list_files_under(standards_dir)? {
        if path == Path::new("manifest.toml") {
            continue;
        }
        if !manifest_paths.contains(&normalize_path(&path)) {
            return Err(StandardsError::UnexpectedFile {
                path: standards_dir.join(path),
            });
        }
    }

    Ok(())
}

fn verify_file(standards_dir: &Path, file: &ManifestFile) -> Result<(), StandardsError> {
    let full_path = standards_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            StandardsError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(StandardsError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok(())
}

fn resolve_role_path(
    standards_dir: &Path,
    files: &[ManifestFile],
    role: &str,
) -> Result<PathBuf, StandardsError> {
    let f = files
        .iter()
        .find(|f| f.role == role)
        .ok_or_else(|| StandardsError::MissingRole {
            role: role.to_string(),
        })?;
    Ok(standards_dir.join(&f.path))
}

fn validate_sha(sha: &str, path: &str) -> Result<(), StandardsError> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StandardsError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf, StandardsError> {
    if path.contains('\\') {
        return Err(StandardsError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(StandardsError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(StandardsError::InvalidPath {
            path: p,
            message: "manifest path must not traverse out of standards/".to_string(),
        });
    }

    Ok(p)
}

fn list_files_under(root: &Path) -> Result<BTreeSet<PathBuf>, StandardsError> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = BTreeSet::new();

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| StandardsError::io(&dir, e))? {
            let entry = entry.map_err(|e| StandardsError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| StandardsError::InvalidPath {
                        path: path.clone(),
                        message: format!("failed to relativize path: {e}"),
                    })?
                    .to_path_buf();
                files.insert(rel);
            }
        }
    }

    Ok(files)
}

fn normalize_path(p: &Path) -> PathBuf {
    p.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_parent_traversal() {
        let err = validate_path("../rooms.csv").unwrap_err();
        assert!(matches!(err, StandardsError::InvalidPath { .. }));
    }

    #[test]
    fn rejects_short_sha() {
        assert!(validate_sha("abc", "rooms.csv").is_err());
    }

    #[test]
    fn normalize_drops_current_dir() {
        assert_eq!(
            normalize_path(Path::new("./corrections/rooms.csv")),
            PathBuf::from("corrections/rooms.csv")
        );
    }
}
