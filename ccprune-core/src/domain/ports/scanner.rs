use crate::domain::filter::SourceFilter;
use crate::error::PruneError;
use std::path::{Path, PathBuf};

pub trait TreeScanner {
    /// Absolute paths of every file under `root` accepted by `filter`.
    fn scan(&self, root: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, PruneError>;
}
