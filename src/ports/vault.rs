//! Vault-level file operations needed to relocate attachments.
//!
//! All `path` arguments are normalized vault paths. Implementations must
//! reject paths that escape the vault root.

use crate::domain::AppError;

/// Port for the vault a relocation operates on.
pub trait Vault {
    /// Create a folder and any missing parents.
    ///
    /// Fails with an error whose `kind()` is `AlreadyExists` when the folder
    /// is already present.
    fn create_folder(&self, path: &str) -> Result<(), AppError>;

    /// Move a file and rewrite every note reference to it.
    ///
    /// Fails without changing anything when `to` is occupied or `from` is
    /// missing.
    fn rename_with_links(&self, from: &str, to: &str) -> Result<(), AppError>;

    /// Check whether a file or folder exists.
    fn exists(&self, path: &str) -> bool;
}
