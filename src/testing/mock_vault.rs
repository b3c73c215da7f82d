//! In-memory `Vault` double.

use std::collections::BTreeSet;
use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::Vault;

#[derive(Debug, Default)]
struct VaultState {
    files: BTreeSet<String>,
    folders: BTreeSet<String>,
    renames: Vec<(String, String)>,
    fail_folder_creation: bool,
}

/// In-memory vault tracking files, folders and performed renames.
#[derive(Clone, Debug, Default)]
pub struct MockVault {
    state: Arc<Mutex<VaultState>>,
}

impl MockVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the vault.
    pub fn add_file(&self, path: &str) {
        self.state.lock().unwrap().files.insert(path.to_string());
    }

    /// Seed a folder into the vault.
    pub fn add_folder(&self, path: &str) {
        self.state.lock().unwrap().folders.insert(path.to_string());
    }

    /// Make every folder creation fail with a permission error.
    pub fn fail_folder_creation(&self) {
        self.state.lock().unwrap().fail_folder_creation = true;
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.state.lock().unwrap().files.contains(path)
    }

    pub fn has_folder(&self, path: &str) -> bool {
        self.state.lock().unwrap().folders.contains(path)
    }

    pub fn renames(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().renames.clone()
    }
}

impl Vault for MockVault {
    fn create_folder(&self, path: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_folder_creation {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "mock: read-only").into());
        }
        if !state.folders.insert(path.to_string()) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "mock: folder exists").into());
        }
        Ok(())
    }

    fn rename_with_links(&self, from: &str, to: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.files.contains(from) {
            return Err(AppError::SourceNotFound(from.to_string()));
        }
        if state.files.contains(to) {
            return Err(AppError::TargetOccupied(to.to_string()));
        }
        state.files.remove(from);
        state.files.insert(to.to_string());
        state.renames.push((from.to_string(), to.to_string()));
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains(path) || state.folders.contains(path)
    }
}
