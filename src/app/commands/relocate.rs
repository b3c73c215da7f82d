//! Decide-and-move pipeline for a single creation event.

use std::io::ErrorKind;

use crate::app::AppContext;
use crate::domain::vault_path::{file_name, parent_folder};
use crate::domain::{
    FileCreationEvent, PolicyConfiguration, RelocationDecision, RelocationOutcome, decide,
};
use crate::ports::{ActiveDocument, Notifier, Vault};

/// What happened to one created entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationReport {
    pub decision: RelocationDecision,
    pub outcome: Option<RelocationOutcome>,
}

impl RelocationReport {
    pub fn ignored() -> Self {
        Self { decision: RelocationDecision::Ignore, outcome: None }
    }

    pub fn moved(&self) -> bool {
        self.outcome.as_ref().is_some_and(|outcome| outcome.success)
    }

    pub fn failed(&self) -> bool {
        self.outcome.as_ref().is_some_and(|outcome| !outcome.success)
    }
}

/// Resolve the active note, decide, and carry out any move.
pub fn handle_creation<V, A, N>(
    ctx: &AppContext<V, A, N>,
    config: &PolicyConfiguration,
    event: &FileCreationEvent,
) -> RelocationReport
where
    V: Vault,
    A: ActiveDocument,
    N: Notifier,
{
    let decision = decide_now(ctx, config, event);

    let outcome = match &decision {
        RelocationDecision::Ignore => None,
        RelocationDecision::Move(target) => {
            Some(execute(ctx.vault(), ctx.notifier(), &event.path, target))
        }
    };

    RelocationReport { decision, outcome }
}

/// Decide against the note that is active right now.
pub fn decide_now<V, A, N>(
    ctx: &AppContext<V, A, N>,
    config: &PolicyConfiguration,
    event: &FileCreationEvent,
) -> RelocationDecision
where
    V: Vault,
    A: ActiveDocument,
    N: Notifier,
{
    let active = ctx.active_document().current_active_document_path();
    decide(event, active.as_deref(), config)
}

/// Move `source` to `target`, creating the target folder first.
///
/// A folder that cannot be created is only logged; the move reports it.
/// Never fails: problems are logged, surfaced through `notifier`, and
/// reported in the returned outcome with the source left in place.
pub fn execute(
    vault: &impl Vault,
    notifier: &impl Notifier,
    source: &str,
    target: &str,
) -> RelocationOutcome {
    let folder = parent_folder(target);
    let name = file_name(target);

    if !folder.is_empty() {
        match vault.create_folder(folder) {
            Ok(()) => tracing::debug!(folder, "created attachment folder"),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
            Err(err) => tracing::debug!(folder, error = %err, "could not create attachment folder"),
        }
    }

    match vault.rename_with_links(source, target) {
        Ok(()) => {
            tracing::info!(from = source, to = target, "moved attachment");
            notifier.notify(&format!("✅ Moved attachment {} to {}", name, folder));
            RelocationOutcome::moved(source, target)
        }
        Err(err) => {
            tracing::error!(from = source, to = target, error = %err, "failed to move attachment");
            notifier.notify(&format!(
                "❌ Failed to move attachment {}. A file with the same name may already exist.",
                name
            ));
            RelocationOutcome::failed(source, target, err.to_string())
        }
    }
}
