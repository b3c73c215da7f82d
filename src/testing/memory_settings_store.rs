use std::sync::{Arc, Mutex};

use crate::domain::{AppError, PolicyConfiguration};
use crate::ports::SettingsStore;

/// In-memory `SettingsStore` that counts saves.
#[derive(Clone, Debug, Default)]
pub struct MemorySettingsStore {
    stored: Arc<Mutex<Option<PolicyConfiguration>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemorySettingsStore {
    pub fn with(config: PolicyConfiguration) -> Self {
        Self { stored: Arc::new(Mutex::new(Some(config))), saves: Arc::default() }
    }

    pub fn stored(&self) -> Option<PolicyConfiguration> {
        self.stored.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    /// Replace the stored value without counting it as a save.
    pub fn overwrite(&self, config: PolicyConfiguration) {
        *self.stored.lock().unwrap() = Some(config);
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<PolicyConfiguration>, AppError> {
        Ok(self.stored())
    }

    fn save(&self, config: &PolicyConfiguration) -> Result<(), AppError> {
        *self.stored.lock().unwrap() = Some(config.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
