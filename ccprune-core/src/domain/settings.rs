// src/domain/settings.rs

use std::path::PathBuf;

use validator::{Validate, ValidationError};

use super::filter::{DEFAULT_EXTENSIONS, SourceFilter};

pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Fully merged settings for one run (defaults < file < env < CLI).
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct PruneSettings {
    /// Directory walked for candidates; relative manifest entries resolve against it.
    pub root: PathBuf,

    #[validate(length(min = 1, message = "At least one extension is required"))]
    #[validate(custom(function = "validate_extensions"))]
    pub extensions: Vec<String>,

    #[validate(range(min = 1, max = 1000))]
    pub preview_limit: usize,

    pub assume_yes: bool,

    pub dry_run: bool,
}

impl Default for PruneSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            assume_yes: false,
            dry_run: false,
        }
    }
}

impl PruneSettings {
    pub fn filter(&self) -> SourceFilter {
        SourceFilter::new(&self.extensions)
    }
}

fn validate_extensions(extensions: &[String]) -> Result<(), ValidationError> {
    if extensions
        .iter()
        .any(|ext| ext.trim().trim_start_matches('.').is_empty())
    {
        return Err(ValidationError::new("empty_extension"));
    }
    Ok(())
}
