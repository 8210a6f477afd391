// ccprune-core/src/infrastructure/manifest.rs

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::domain::filter::SourceFilter;
use crate::domain::keep_set::KeepSet;
use crate::domain::ports::ManifestSource;
use crate::error::PruneError;
use crate::infrastructure::error::ManifestError;
use crate::infrastructure::fs::absolutize;

/// Reads a JSON array of records (e.g. `compile_commands.json`) and keeps
/// the `file` of every record that names a source file.
pub struct JsonManifest;

impl ManifestSource for JsonManifest {
    fn load(
        &self,
        manifest: &Path,
        base_dir: &Path,
        filter: &SourceFilter,
    ) -> Result<KeepSet, PruneError> {
        Ok(Self::read_keep_set(manifest, base_dir, filter)?)
    }
}

impl JsonManifest {
    #[instrument(skip(filter))]
    pub fn read_keep_set(
        manifest: &Path,
        base_dir: &Path,
        filter: &SourceFilter,
    ) -> Result<KeepSet, ManifestError> {
        let content = fs::read_to_string(manifest).map_err(|source| ManifestError::Read {
            path: manifest.to_path_buf(),
            source,
        })?;

        let keep = Self::parse_keep_set(&content, manifest, base_dir, filter)?;
        info!(kept = keep.len(), "Manifest loaded");
        Ok(keep)
    }

    /// `manifest` is only used for error messages.
    pub fn parse_keep_set(
        content: &str,
        manifest: &Path,
        base_dir: &Path,
        filter: &SourceFilter,
    ) -> Result<KeepSet, ManifestError> {
        let document: Value =
            serde_json::from_str(content).map_err(|source| ManifestError::Parse {
                path: manifest.to_path_buf(),
                source,
            })?;

        let records = match document {
            Value::Array(records) => records,
            other => {
                return Err(ManifestError::NotAnArray {
                    path: manifest.to_path_buf(),
                    found: json_kind(&other),
                });
            }
        };

        let mut kept = Vec::new();
        for (index, record) in records.iter().enumerate() {
            if !record.is_object() {
                warn!(index, kind = json_kind(record), "Skipping non-object manifest record");
                continue;
            }

            // Absent or non-string `file` counts as empty, which never matches.
            let file = record.get("file").and_then(Value::as_str).unwrap_or_default();
            if filter.matches(file) {
                kept.push(absolutize(base_dir, Path::new(file)));
            } else {
                debug!(index, file, "Ignoring manifest record");
            }
        }

        Ok(kept.into_iter().collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
