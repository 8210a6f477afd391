use crate::domain::filter::SourceFilter;
use crate::domain::keep_set::KeepSet;
use crate::error::PruneError;
use std::path::Path;

pub trait ManifestSource {
    /// Builds the keep-set from `manifest`, resolving relative entries
    /// against `base_dir`.
    fn load(
        &self,
        manifest: &Path,
        base_dir: &Path,
        filter: &SourceFilter,
    ) -> Result<KeepSet, PruneError>;
}
