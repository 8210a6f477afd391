// ccprune-core/src/infrastructure/config/settings.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::filter::normalize_extension;
use crate::domain::settings::PruneSettings;
use crate::infrastructure::error::ConfigError;

pub const SETTINGS_FILE_NAME: &str = "ccprune.yaml";
pub const ENV_PREVIEW_LIMIT: &str = "CCPRUNE_PREVIEW_LIMIT";

/// On-disk shape of `ccprune.yaml`. Every key is optional.
///
/// There is no confirmation key: the file may live inside the tree being
/// pruned, so only `--yes` can skip the prompt.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub preview_limit: Option<usize>,
}

/// Values coming from the command line. They win over everything else.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub root: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub preview_limit: Option<usize>,
    pub assume_yes: bool,
    pub dry_run: bool,
}

/// Defaults, then settings file, then environment, then command line.
#[instrument(skip(overrides))]
pub fn load_settings(overrides: SettingsOverrides) -> Result<PruneSettings, ConfigError> {
    load_settings_with_env(overrides, |key| std::env::var(key).ok())
}

pub fn load_settings_with_env<F>(
    overrides: SettingsOverrides,
    env: F,
) -> Result<PruneSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = PruneSettings::default();
    if let Some(root) = overrides.root.clone() {
        settings.root = root;
    }

    // 1. Settings file: explicit one must exist, the implicit one is optional
    let file_path = match &overrides.config_file {
        Some(path) => Some(path.clone()),
        None => {
            let candidate = settings.root.join(SETTINGS_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    };
    if let Some(path) = file_path {
        let file = read_settings_file(&path)?;
        apply_file(&mut settings, file);
        info!(path = ?path, "Settings file loaded");
    }

    // 2. Environment
    apply_env_overrides(&mut settings, &env)?;

    // 3. Command line
    if !overrides.extensions.is_empty() {
        settings.extensions = overrides.extensions;
    }
    if let Some(limit) = overrides.preview_limit {
        settings.preview_limit = limit;
    }
    settings.assume_yes |= overrides.assume_yes;
    settings.dry_run |= overrides.dry_run;

    settings.validate()?;
    settings.extensions = settings
        .extensions
        .iter()
        .map(|ext| normalize_extension(ext))
        .collect();

    Ok(settings)
}

pub fn read_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_file(settings: &mut PruneSettings, file: SettingsFile) {
    if let Some(extensions) = file.extensions {
        settings.extensions = extensions;
    }
    if let Some(limit) = file.preview_limit {
        settings.preview_limit = limit;
    }
}

fn apply_env_overrides<F>(settings: &mut PruneSettings, env: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(ENV_PREVIEW_LIMIT) {
        settings.preview_limit = value.trim().parse().map_err(|_| ConfigError::Env {
            var: ENV_PREVIEW_LIMIT,
            value: value.clone(),
        })?;
        info!(preview_limit = settings.preview_limit, "Overriding preview limit via ENV");
    }
    Ok(())
}
