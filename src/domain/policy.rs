//! Relocation policy configuration.

use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::vault_path::{VAULT_ROOT, normalize_vault_path};

pub const DEFAULT_PUBLIC_FOLDER: &str = "public";
pub const ATTACHMENTS_SUBFOLDER: &str = "attachments";

/// Folder prefixes that drive attachment relocation.
///
/// Both values are kept in normalized vault path form so prefix checks can
/// append a single `/` without further cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfiguration {
    pub public_folder: String,
    pub public_attachment_folder: String,
}

impl Default for PolicyConfiguration {
    fn default() -> Self {
        Self {
            public_folder: DEFAULT_PUBLIC_FOLDER.to_string(),
            public_attachment_folder: default_attachment_folder(DEFAULT_PUBLIC_FOLDER),
        }
    }
}

/// A batch of configuration edits applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyUpdate {
    pub public_folder: Option<String>,
    pub public_attachment_folder: Option<String>,
}

impl PolicyUpdate {
    pub fn is_empty(&self) -> bool {
        self.public_folder.is_none() && self.public_attachment_folder.is_none()
    }
}

/// Attachment folder derived from a public folder: `<public>/attachments`.
pub fn default_attachment_folder(public_folder: &str) -> String {
    normalize_vault_path(&format!("{}/{}", public_folder, ATTACHMENTS_SUBFOLDER))
}

impl PolicyConfiguration {
    /// Apply an update batch, returning the resulting configuration.
    ///
    /// Changing the public folder resets the attachment folder to
    /// `<public>/attachments` unless the same batch also sets it.
    pub fn apply(&self, update: &PolicyUpdate) -> Result<Self, AppError> {
        let mut next = self.clone();

        if let Some(public_folder) = &update.public_folder {
            next.public_folder = normalize_folder("public folder", public_folder)?;
            next.public_attachment_folder = default_attachment_folder(&next.public_folder);
        }

        if let Some(attachment_folder) = &update.public_attachment_folder {
            next.public_attachment_folder =
                normalize_folder("public attachment folder", attachment_folder)?;
        }

        Ok(next)
    }

    /// Re-normalize values loaded from storage.
    pub fn normalized(self) -> Result<Self, AppError> {
        Ok(Self {
            public_folder: normalize_folder("public folder", &self.public_folder)?,
            public_attachment_folder: normalize_folder(
                "public attachment folder",
                &self.public_attachment_folder,
            )?,
        })
    }
}

fn normalize_folder(label: &str, raw: &str) -> Result<String, AppError> {
    let normalized = normalize_vault_path(raw.trim());
    if normalized == VAULT_ROOT {
        return Err(AppError::config_error(format!(
            "The {} must name a folder inside the vault (got '{}')",
            label, raw
        )));
    }
    Ok(normalized)
}
