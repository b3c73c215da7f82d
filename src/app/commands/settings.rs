//! Settings load/update path.
//!
//! `update` is the only way configuration changes; it persists after every
//! mutation.

use crate::domain::{AppError, PolicyConfiguration, PolicyUpdate};
use crate::ports::SettingsStore;

/// Current settings, falling back to defaults when nothing is stored.
pub fn load(store: &impl SettingsStore) -> Result<PolicyConfiguration, AppError> {
    Ok(store.load()?.unwrap_or_default())
}

/// Apply `update` to the stored settings and persist the result.
pub fn update(
    store: &impl SettingsStore,
    update: &PolicyUpdate,
) -> Result<PolicyConfiguration, AppError> {
    let current = load(store)?;
    if update.is_empty() {
        return Ok(current);
    }

    let next = current.apply(update)?;
    store.save(&next)?;
    tracing::info!(
        public_folder = %next.public_folder,
        public_attachment_folder = %next.public_attachment_folder,
        "settings updated"
    );
    Ok(next)
}
