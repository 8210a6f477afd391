// ccprune-core/src/domain/keep_set.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Absolute paths that must never be deleted. Built once from the manifest.
#[derive(Debug, Clone, Default)]
pub struct KeepSet {
    paths: HashSet<PathBuf>,
}

impl KeepSet {
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<PathBuf> for KeepSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
