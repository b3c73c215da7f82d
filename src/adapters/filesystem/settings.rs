//! `SettingsStore` implementation for `VaultStore`.

use std::fs;

use crate::domain::{AppError, PolicyConfiguration};
use crate::ports::SettingsStore;

use super::VaultStore;

/// Vault path of the persisted settings file.
pub const SETTINGS_PATH: &str = ".divat/settings.toml";

impl SettingsStore for VaultStore {
    fn load(&self) -> Result<Option<PolicyConfiguration>, AppError> {
        let full_path = self.resolve_checked(SETTINGS_PATH)?;
        if !full_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(full_path)?;
        let config: PolicyConfiguration = toml::from_str(&content)?;
        config.normalized().map(Some)
    }

    fn save(&self, config: &PolicyConfiguration) -> Result<(), AppError> {
        let full_path = self.resolve_checked(SETTINGS_PATH)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string(config)?;
        fs::write(full_path, serialized).map_err(AppError::from)
    }
}
