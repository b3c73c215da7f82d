//! Filesystem adapter implementations for vault ports.
//!
//! `VaultStore` owns the vault root and implements both `Vault` and
//! `SettingsStore`. Every path is validated against the root to prevent
//! directory traversal.

mod settings;
mod vault;

use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;

pub use settings::SETTINGS_PATH;

/// Filesystem-backed store rooted at a vault directory.
#[derive(Debug, Clone)]
pub struct VaultStore {
    root: PathBuf,
    /// Shared by clones so moves through one store never interleave.
    moves: Arc<Mutex<()>>,
}

impl VaultStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root, moves: Arc::new(Mutex::new(())) }
    }

    /// The vault root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault path.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Whether a vault path names a directory.
    pub fn is_dir(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path).is_ok() && full_path.is_dir()
    }

    /// Convert an absolute path below the root into vault path form.
    ///
    /// Returns `None` for paths outside the root, the root itself, and
    /// paths that are not valid UTF-8.
    pub fn vault_path_of(&self, path: &Path) -> Option<String> {
        vault_path_under(&self.root, path).or_else(|| {
            let root = self.root.canonicalize().ok()?;
            let path = path.canonicalize().ok()?;
            vault_path_under(&root, &path)
        })
    }

    fn resolve_checked(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        Ok(full_path)
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl VaultStore {
    /// Validates that a path (after logical normalization) is within the root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(())
    }
}

/// Vault path of `path` relative to `root`, joined with `/`.
pub(crate) fn vault_path_under(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            _ => return None,
        }
    }
    if segments.is_empty() { None } else { Some(segments.join("/")) }
}

/// Whether any segment of a vault path is hidden (starts with `.`).
pub(crate) fn is_hidden_vault_path(path: &str) -> bool {
    path.split('/').any(|segment| segment.starts_with('.'))
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
