// ccprune-core/src/domain/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// A single file that could not be removed. Collected, never propagated.
#[derive(Error, Debug, Diagnostic)]
#[error("Error deleting {}: {}", .path.display(), .source)]
#[diagnostic(code(ccprune::delete))]
pub struct DeletionError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
