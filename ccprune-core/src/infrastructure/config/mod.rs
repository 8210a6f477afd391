pub mod settings;

pub use crate::domain::settings::PruneSettings;
pub use settings::{SettingsFile, SettingsOverrides, load_settings};
