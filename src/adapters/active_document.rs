//! Active-document adapters.
//!
//! `ObsidianWorkspace` follows the editor's own session file so the watcher
//! sees the same "current note" the user does. `PinnedDocument` lets the
//! caller name the note explicitly.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::normalize_vault_path;
use crate::ports::ActiveDocument;

/// Vault path of the editor's session file.
pub const WORKSPACE_STATE_PATH: &str = ".obsidian/workspace.json";

#[derive(Debug, Deserialize)]
struct WorkspaceState {
    #[serde(default)]
    active: Option<String>,
    #[serde(default)]
    main: Option<Value>,
    #[serde(default, rename = "lastOpenFiles")]
    last_open_files: Vec<String>,
}

/// Reads the active note from `.obsidian/workspace.json` on every query.
#[derive(Debug, Clone)]
pub struct ObsidianWorkspace {
    root: PathBuf,
}

impl ObsidianWorkspace {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn read_state(&self) -> Option<WorkspaceState> {
        let path = self.root.join(WORKSPACE_STATE_PATH);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unreadable workspace state");
                None
            }
        }
    }
}

impl ActiveDocument for ObsidianWorkspace {
    fn current_active_document_path(&self) -> Option<String> {
        let state = self.read_state()?;

        let focused = state
            .active
            .as_deref()
            .zip(state.main.as_ref())
            .and_then(|(leaf_id, main)| find_leaf_file(main, leaf_id));

        focused
            .or_else(|| state.last_open_files.into_iter().find(|file| is_note(file)))
            .map(|file| normalize_vault_path(&file))
    }
}

/// Locate the note open in the leaf with `leaf_id` anywhere in the split tree.
fn find_leaf_file(node: &Value, leaf_id: &str) -> Option<String> {
    if node.get("id").and_then(Value::as_str) == Some(leaf_id) {
        let file = node.pointer("/state/state/file").and_then(Value::as_str)?;
        return is_note(file).then(|| file.to_string());
    }

    node.get("children")
        .and_then(Value::as_array)?
        .iter()
        .find_map(|child| find_leaf_file(child, leaf_id))
}

fn is_note(path: &str) -> bool {
    path.to_ascii_lowercase().ends_with(".md")
}

/// Always reports the same note.
#[derive(Debug, Clone)]
pub struct PinnedDocument {
    path: String,
}

impl PinnedDocument {
    pub fn new(path: &str) -> Self {
        Self { path: normalize_vault_path(path) }
    }
}

impl ActiveDocument for PinnedDocument {
    fn current_active_document_path(&self) -> Option<String> {
        Some(self.path.clone())
    }
}

/// Active-document resolver chosen at startup.
#[derive(Debug, Clone)]
pub enum ActiveDocumentSource {
    Workspace(ObsidianWorkspace),
    Pinned(PinnedDocument),
}

impl ActiveDocumentSource {
    /// Pin to `active` when given, otherwise follow the editor session in `root`.
    pub fn select(root: PathBuf, active: Option<&str>) -> Self {
        match active {
            Some(path) => Self::Pinned(PinnedDocument::new(path)),
            None => Self::Workspace(ObsidianWorkspace::new(root)),
        }
    }
}

impl ActiveDocument for ActiveDocumentSource {
    fn current_active_document_path(&self) -> Option<String> {
        match self {
            Self::Workspace(workspace) => workspace.current_active_document_path(),
            Self::Pinned(pinned) => pinned.current_active_document_path(),
        }
    }
}
