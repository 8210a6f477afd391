// ccprune-core/src/error.rs

use crate::infrastructure::error::{ConfigError, ManifestError, ScanError};
use miette::Diagnostic;
use thiserror::Error;

/// Fatal failures of a prune run. Per-file deletion failures are not part of
/// this enum: they are collected in the `DeletionReport`.
#[derive(Error, Debug, Diagnostic)]
pub enum PruneError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Console I/O Error: {0}")]
    #[diagnostic(code(ccprune::console))]
    Console(#[from] std::io::Error),
}
