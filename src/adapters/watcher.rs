//! Vault change subscription backed by `notify`.
//!
//! Raw notifications are turned into validated `VaultSignal`s on the
//! watcher thread and forwarded over an unbounded channel to the event loop.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use notify::event::{CreateKind, ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::UnboundedSender;

use crate::domain::{AppError, FileCreationEvent};

use super::filesystem::{SETTINGS_PATH, is_hidden_vault_path, vault_path_under};

/// A vault change relevant to relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultSignal {
    /// A new file or folder appeared.
    Created(FileCreationEvent),
    /// The persisted settings file was written.
    SettingsChanged,
    /// The watcher reported an error.
    Failed(String),
}

/// Live recursive subscription to a vault. Dropping it unsubscribes.
pub struct VaultWatcher {
    _watcher: RecommendedWatcher,
}

impl VaultWatcher {
    /// Subscribe to `root` and forward signals to `sender`.
    pub fn start(root: &Path, sender: UnboundedSender<VaultSignal>) -> Result<Self, AppError> {
        let watch_root = root.canonicalize()?;
        let mut classifier = SignalClassifier::new(watch_root.clone());

        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            for signal in classifier.classify(result) {
                // Receiver gone means the loop is shutting down.
                let _ = sender.send(signal);
            }
        })?;
        watcher.watch(&watch_root, RecursiveMode::Recursive)?;

        tracing::info!(root = %watch_root.display(), "watching vault");
        Ok(Self { _watcher: watcher })
    }
}

/// Rename cookies remembered while waiting for the matching destination.
const PENDING_RENAME_LIMIT: usize = 64;

/// Turns raw notifications into vault signals.
///
/// A rename destination counts as a creation only when its source half was
/// never seen, i.e. the file was moved in from outside the vault. Renames
/// inside the vault are not creations.
pub(crate) struct SignalClassifier {
    root: PathBuf,
    pending_renames: VecDeque<usize>,
}

impl SignalClassifier {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root, pending_renames: VecDeque::new() }
    }

    /// Translate one raw notification into vault signals.
    pub(crate) fn classify(&mut self, result: notify::Result<Event>) -> Vec<VaultSignal> {
        let event = match result {
            Ok(event) => event,
            Err(err) => return vec![VaultSignal::Failed(err.to_string())],
        };

        let created_dir_hint = match event.kind {
            EventKind::Create(CreateKind::File) => Some(false),
            EventKind::Create(CreateKind::Folder) => Some(true),
            EventKind::Create(_) => None,
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                if let Some(tracker) = event.tracker() {
                    self.remember_rename(tracker);
                }
                return settings_signals(&self.root, &event.paths);
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
                if event.tracker().is_some_and(|tracker| self.take_rename(tracker)) {
                    tracing::trace!(paths = ?event.paths, "rename inside vault");
                    return settings_signals(&self.root, &event.paths);
                }
                None
            }
            EventKind::Modify(_) => {
                return settings_signals(&self.root, &event.paths);
            }
            _ => return Vec::new(),
        };

        let mut signals = settings_signals(&self.root, &event.paths);
        for path in &event.paths {
            let Some(vault_path) = vault_path_under(&self.root, path) else {
                continue;
            };
            if is_hidden_vault_path(&vault_path) {
                continue;
            }
            let is_directory = created_dir_hint.unwrap_or_else(|| path.is_dir());
            match FileCreationEvent::from_vault_path(&vault_path, is_directory) {
                Ok(event) => signals.push(VaultSignal::Created(event)),
                Err(err) => tracing::debug!(error = %err, "dropping creation event"),
            }
        }
        signals
    }

    fn remember_rename(&mut self, tracker: usize) {
        if self.pending_renames.len() == PENDING_RENAME_LIMIT {
            self.pending_renames.pop_front();
        }
        self.pending_renames.push_back(tracker);
    }

    fn take_rename(&mut self, tracker: usize) -> bool {
        match self.pending_renames.iter().position(|pending| *pending == tracker) {
            Some(index) => {
                self.pending_renames.remove(index);
                true
            }
            None => false,
        }
    }
}

fn settings_signals(root: &Path, paths: &[PathBuf]) -> Vec<VaultSignal> {
    let touches_settings =
        paths.iter().any(|path| vault_path_under(root, path).as_deref() == Some(SETTINGS_PATH));
    if touches_settings { vec![VaultSignal::SettingsChanged] } else { Vec::new() }
}
