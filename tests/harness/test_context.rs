//! Shared testing harness for `divat` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated vault for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    vault: PathBuf,
}

impl TestContext {
    /// Create a new isolated vault.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let vault = root.path().join("vault");
        fs::create_dir_all(&vault).expect("Failed to create test vault directory");
        Self { root, vault }
    }

    /// Path to the vault used for CLI invocations.
    pub(crate) fn vault(&self) -> &Path {
        &self.vault
    }

    /// Directory containing the vault, outside of it.
    pub(crate) fn outside(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `divat` binary inside the vault.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("divat").expect("Failed to locate divat binary");
        cmd.current_dir(&self.vault).env("RUST_LOG", "divat=debug");
        cmd
    }

    /// Write a file into the vault, creating parent folders.
    pub(crate) fn write(&self, path: &str, content: &str) {
        let full = self.vault.join(path);
        fs::create_dir_all(full.parent().expect("vault file has a parent"))
            .expect("Failed to create parent folder");
        fs::write(full, content).expect("Failed to write vault file");
    }

    /// Read a vault file.
    pub(crate) fn read(&self, path: &str) -> String {
        fs::read_to_string(self.vault.join(path)).expect("Failed to read vault file")
    }

    /// Whether a vault path exists.
    pub(crate) fn exists(&self, path: &str) -> bool {
        self.vault.join(path).exists()
    }

    /// Record `note` as the active note in the editor session file.
    pub(crate) fn set_active_note(&self, note: &str) {
        let state = format!(
            r#"{{
  "main": {{
    "id": "main-split",
    "type": "split",
    "children": [
      {{ "id": "leaf-1", "type": "leaf", "state": {{ "type": "markdown", "state": {{ "file": "{note}" }} }} }}
    ]
  }},
  "active": "leaf-1",
  "lastOpenFiles": ["{note}"]
}}"#
        );
        self.write(".obsidian/workspace.json", &state);
    }

    /// Write the persisted settings file directly.
    pub(crate) fn write_settings(&self, public_folder: &str, public_attachment_folder: &str) {
        self.write(
            ".divat/settings.toml",
            &format!(
                "public_folder = \"{}\"\npublic_attachment_folder = \"{}\"\n",
                public_folder, public_attachment_folder
            ),
        );
    }

    /// Parse the persisted settings file.
    pub(crate) fn read_settings(&self) -> toml::Value {
        toml::from_str(&self.read(".divat/settings.toml")).expect("settings should be valid TOML")
    }
}
