//! `Vault` implementation for `VaultStore`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::PoisonError;

use walkdir::{DirEntry, WalkDir};

use crate::domain::AppError;
use crate::domain::links::rewrite_references;
use crate::ports::Vault;

use super::VaultStore;

/// A note whose references to the moved file have been rewritten in memory.
struct NoteRewrite {
    path: PathBuf,
    original: String,
    rewritten: String,
}

impl Vault for VaultStore {
    fn create_folder(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_checked(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir(full_path).map_err(AppError::from)
    }

    fn rename_with_links(&self, from: &str, to: &str) -> Result<(), AppError> {
        let source = self.resolve_checked(from)?;
        let target = self.resolve_checked(to)?;

        // Held from the occupancy check until every note is written.
        let _guard = self.moves.lock().unwrap_or_else(PoisonError::into_inner);

        if !source.is_file() {
            return Err(AppError::SourceNotFound(from.to_string()));
        }
        if target.exists() {
            return Err(AppError::TargetOccupied(to.to_string()));
        }

        let rewrites = self.plan_link_rewrites(from, to)?;

        claim_target(&source, &target, to)?;

        for (written, rewrite) in rewrites.iter().enumerate() {
            if let Err(err) = fs::write(&rewrite.path, &rewrite.rewritten) {
                tracing::warn!(note = %rewrite.path.display(), error = %err, "rolling back move");
                restore_notes(&rewrites[..written]);
                fs::rename(&target, &source)?;
                return Err(err.into());
            }
        }

        tracing::debug!(from, to, notes = rewrites.len(), "rewrote references");
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path).is_ok() && full_path.exists()
    }
}

impl VaultStore {
    /// Read every note and compute its rewritten text, touching nothing.
    fn plan_link_rewrites(&self, from: &str, to: &str) -> Result<Vec<NoteRewrite>, AppError> {
        let mut rewrites = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| !is_hidden(entry));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable vault entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_note(&entry) {
                continue;
            }
            let Some(note_path) = self.vault_path_of(entry.path()) else {
                continue;
            };

            let original = match fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(err) => {
                    tracing::warn!(note = %note_path, error = %err, "skipping unreadable note");
                    continue;
                }
            };
            if let Some(rewritten) = rewrite_references(&note_path, &original, from, to) {
                rewrites.push(NoteRewrite { path: entry.into_path(), original, rewritten });
            }
        }

        Ok(rewrites)
    }
}

/// Move `source` onto `target` without ever replacing an existing file.
///
/// The hard link fails with `AlreadyExists` if anything occupies `target`.
/// Filesystems without hard links fall back to a checked rename.
fn claim_target(source: &Path, target: &Path, to: &str) -> Result<(), AppError> {
    match fs::hard_link(source, target) {
        Ok(()) => {
            if let Err(err) = fs::remove_file(source) {
                let _ = fs::remove_file(target);
                return Err(err.into());
            }
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            Err(AppError::TargetOccupied(to.to_string()))
        }
        Err(err) => {
            tracing::debug!(error = %err, "hard link unavailable, renaming");
            if target.exists() {
                return Err(AppError::TargetOccupied(to.to_string()));
            }
            fs::rename(source, target).map_err(AppError::from)
        }
    }
}

fn restore_notes(rewrites: &[NoteRewrite]) {
    for rewrite in rewrites {
        if let Err(err) = fs::write(&rewrite.path, &rewrite.original) {
            tracing::error!(note = %rewrite.path.display(), error = %err, "failed to restore note");
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn is_note(entry: &DirEntry) -> bool {
    entry.path().extension().and_then(|ext| ext.to_str()).is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}
