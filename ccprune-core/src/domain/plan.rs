// ccprune-core/src/domain/plan.rs

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use super::keep_set::KeepSet;

/// Candidates minus keep-set, in scan order. Consumed once by the deleter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    paths: Vec<PathBuf>,
}

impl DeletionPlan {
    pub fn compute<I>(scanned: I, keep: &KeepSet) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut seen = HashSet::new();
        let paths = scanned
            .into_iter()
            .filter(|path| !keep.contains(path))
            .filter(|path| seen.insert(path.clone()))
            .collect();
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }

    /// The first `limit` entries plus the count of the ones left out.
    pub fn preview(&self, limit: usize) -> Preview<'_> {
        let shown = limit.min(self.paths.len());
        Preview {
            total: self.paths.len(),
            entries: &self.paths[..shown],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    pub total: usize,
    pub entries: &'a [PathBuf],
}

impl Preview<'_> {
    pub fn remaining(&self) -> usize {
        self.total - self.entries.len()
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {} files to delete:", self.total)?;
        for (index, path) in self.entries.iter().enumerate() {
            write!(f, "\n  [{}] {}", index + 1, path.display())?;
        }
        if self.remaining() > 0 {
            write!(f, "\n  ... and {} more", self.remaining())?;
        }
        Ok(())
    }
}
