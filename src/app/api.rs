//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tokio::task::LocalSet;

use crate::adapters::{ActiveDocumentSource, ConsoleNotifier, VaultStore, VaultWatcher};
use crate::app::{
    AppContext,
    commands::{relocate, settings, watch},
};
use crate::domain::{AppError, FileCreationEvent, PolicyConfiguration, PolicyUpdate};
use crate::ports::Vault;

pub use crate::app::commands::relocate::RelocationReport;
pub use crate::app::commands::watch::WatchSummary;

/// Create an `AppContext` for a vault root.
fn create_context(
    root: PathBuf,
    active: Option<&str>,
) -> AppContext<VaultStore, ActiveDocumentSource, ConsoleNotifier> {
    let vault = VaultStore::new(root.clone());
    let active_document = ActiveDocumentSource::select(root, active);
    AppContext::new(vault, active_document, ConsoleNotifier)
}

// =============================================================================
// Settings API
// =============================================================================

/// Current settings of the vault at `root` (defaults when none are stored).
pub fn settings_show_at(root: impl Into<PathBuf>) -> Result<PolicyConfiguration, AppError> {
    let store = VaultStore::new(root.into());
    settings::load(&store)
}

/// Apply and persist a settings update for the vault at `root`.
pub fn settings_update_at(
    root: impl Into<PathBuf>,
    update: &PolicyUpdate,
) -> Result<PolicyConfiguration, AppError> {
    let store = VaultStore::new(root.into());
    settings::update(&store, update)
}

// =============================================================================
// Relocation API
// =============================================================================

/// Run the relocation pipeline once for `path`, as if it had just been created.
///
/// `path` may be vault-relative or an absolute path inside the vault.
/// `active` pins the active note; otherwise the editor session decides.
pub fn relocate_at(
    root: impl Into<PathBuf>,
    path: &Path,
    active: Option<&str>,
) -> Result<RelocationReport, AppError> {
    let root = root.into();
    let ctx = create_context(root.clone(), active);

    let vault_path = if path.is_absolute() {
        ctx.vault()
            .vault_path_of(path)
            .ok_or_else(|| AppError::PathTraversal(path.display().to_string()))?
    } else {
        path.to_str().ok_or_else(|| AppError::InvalidEventPath(path.display().to_string()))?.to_string()
    };

    let event = FileCreationEvent::from_vault_path(&vault_path, ctx.vault().is_dir(&vault_path))?;
    if !ctx.vault().exists(&event.path) {
        return Err(AppError::SourceNotFound(event.path));
    }

    let config = settings::load(ctx.vault())?;
    Ok(relocate::handle_creation(&ctx, &config, &event))
}

// =============================================================================
// Watch API
// =============================================================================

/// Watch the vault at `root` until Ctrl-C, relocating attachments as they appear.
pub fn watch_at(root: impl Into<PathBuf>, active: Option<&str>) -> Result<WatchSummary, AppError> {
    let root = root.into();
    let ctx = create_context(root.clone(), active);
    let store = ctx.vault().clone();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Runtime(err.to_string()))?;

    let local = LocalSet::new();
    local.block_on(&runtime, async move {
        let (sender, receiver) = mpsc::unbounded_channel();
        let _watcher = VaultWatcher::start(&root, sender)?;

        let shutdown = async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };

        let summary = watch::run(ctx, store, receiver, shutdown).await?;
        Ok::<WatchSummary, AppError>(summary)
    })
}
