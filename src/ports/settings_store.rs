use crate::domain::{AppError, PolicyConfiguration};

/// Port for loading and persisting the relocation policy.
pub trait SettingsStore {
    /// Load stored settings, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PolicyConfiguration>, AppError>;

    /// Persist settings, replacing whatever was stored.
    fn save(&self, config: &PolicyConfiguration) -> Result<(), AppError>;
}
