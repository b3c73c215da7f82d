use super::error::AppError;
use super::vault_path::{VAULT_ROOT, file_name, normalize_vault_path};

/// A newly created vault entry, validated at the boundary where the raw
/// notification is received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCreationEvent {
    pub path: String,
    pub extension: String,
    pub name: String,
    pub is_directory: bool,
}

impl FileCreationEvent {
    /// Build an event from a vault-relative path.
    pub fn from_vault_path(path: &str, is_directory: bool) -> Result<Self, AppError> {
        let path = normalize_vault_path(path);
        if path == VAULT_ROOT {
            return Err(AppError::InvalidEventPath(path));
        }

        let name = file_name(&path).to_string();
        let extension = extension_of(&name).to_string();

        Ok(Self { path, extension, name, is_directory })
    }
}

/// Text after the final `.`; empty when there is none or the name only
/// starts with a dot.
fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    }
}
