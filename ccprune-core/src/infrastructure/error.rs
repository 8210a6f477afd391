// ccprune-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ManifestError {
    #[error("Cannot read manifest '{path}': {source}")]
    #[diagnostic(
        code(ccprune::manifest::io),
        help("Check that the manifest exists and is readable.")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in manifest '{path}': {source}")]
    #[diagnostic(
        code(ccprune::manifest::json),
        help("The manifest must be a JSON array of objects with a \"file\" field.")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest '{path}' must be a JSON array, found {found}")]
    #[diagnostic(code(ccprune::manifest::shape))]
    NotAnArray { path: PathBuf, found: &'static str },
}

#[derive(Error, Debug, Diagnostic)]
pub enum ScanError {
    #[error("Cannot read scan root '{path}': {source}")]
    #[diagnostic(
        code(ccprune::scan::root),
        help("Check that the directory exists and is readable.")
    )]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Cannot read settings file '{path}': {source}")]
    #[diagnostic(code(ccprune::config::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML Parsing Error in '{path}': {source}")]
    #[diagnostic(
        code(ccprune::config::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {var}: '{value}'")]
    #[diagnostic(code(ccprune::config::env))]
    Env { var: &'static str, value: String },

    #[error("Invalid settings: {0}")]
    #[diagnostic(
        code(ccprune::config::invalid),
        help("At least one non-empty extension is required and preview-limit must be within 1..=1000.")
    )]
    Invalid(#[from] validator::ValidationErrors),
}
