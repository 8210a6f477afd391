// ccprune-core/src/infrastructure/scanner.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crate::domain::filter::SourceFilter;
use crate::domain::ports::TreeScanner;
use crate::error::PruneError;
use crate::infrastructure::error::ScanError;
use crate::infrastructure::fs::normalize;

/// Recursive walk of the scan root, hidden directories included.
/// Directory symlinks are not descended into.
pub struct WalkScanner;

impl TreeScanner for WalkScanner {
    fn scan(&self, root: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, PruneError> {
        Ok(Self::collect(root, filter)?)
    }
}

impl WalkScanner {
    #[instrument(skip(filter))]
    pub fn collect(root: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, ScanError> {
        // Only the root itself is fatal; anything deeper is skipped with a warning.
        fs::read_dir(root).map_err(|source| ScanError::Root {
            path: root.to_path_buf(),
            source,
        })?;

        let mut found = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(ScanError::Root {
                        path: root.to_path_buf(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable entry");
                    continue;
                }
            };

            if is_regular_file(&entry) && filter.matches_file_name(entry.path()) {
                found.push(normalize(entry.path()));
            }
        }

        info!(candidates = found.len(), "Scan finished");
        Ok(found)
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
