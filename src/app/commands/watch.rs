//! Event loop behind `divat watch`.
//!
//! Runs on a single-threaded runtime inside a `LocalSet`. Each creation
//! signal gets its own local task; tasks snapshot configuration and the
//! active note when they start and suspend only while the move runs on the
//! blocking pool. Tasks are not serialized against each other.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::{JoinError, JoinSet};

use crate::adapters::VaultSignal;
use crate::app::AppContext;
use crate::app::commands::relocate::{self, RelocationReport};
use crate::app::commands::settings;
use crate::domain::{
    AppError, FileCreationEvent, PolicyConfiguration, RelocationDecision, RelocationOutcome,
};
use crate::ports::{ActiveDocument, Notifier, SettingsStore, Vault};

/// Tally of everything the loop handled before it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub moved: usize,
    pub failed: usize,
    pub ignored: usize,
}

impl WatchSummary {
    fn record(&mut self, finished: Result<RelocationReport, JoinError>) {
        match finished {
            Ok(report) if report.moved() => self.moved += 1,
            Ok(report) if report.failed() => self.failed += 1,
            Ok(_) => self.ignored += 1,
            Err(err) => {
                tracing::error!(error = %err, "relocation task aborted");
                self.failed += 1;
            }
        }
    }
}

/// Consume `signals` until the channel closes or `shutdown` resolves.
///
/// Must be driven inside a `tokio::task::LocalSet`. In-flight moves are
/// awaited before returning.
pub async fn run<V, A, N, S>(
    ctx: AppContext<V, A, N>,
    store: S,
    mut signals: UnboundedReceiver<VaultSignal>,
    shutdown: impl Future<Output = ()>,
) -> Result<WatchSummary, AppError>
where
    V: Vault + Clone + Send + 'static,
    A: ActiveDocument + Clone + 'static,
    N: Notifier + Clone + Send + 'static,
    S: SettingsStore,
{
    let config = Rc::new(RefCell::new(settings::load(&store)?));
    let mut tasks: JoinSet<RelocationReport> = JoinSet::new();
    let mut summary = WatchSummary::default();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!(in_flight = tasks.len(), "shutting down");
                break;
            }
            Some(finished) = tasks.join_next(), if !tasks.is_empty() => summary.record(finished),
            signal = signals.recv() => match signal {
                Some(VaultSignal::Created(event)) => {
                    tasks.spawn_local(relocate_task(ctx.clone(), Rc::clone(&config), event));
                }
                Some(VaultSignal::SettingsChanged) => reload_settings(&store, &config),
                Some(VaultSignal::Failed(message)) => {
                    tracing::warn!(error = %message, "watcher error");
                }
                None => break,
            },
        }
    }

    while let Some(finished) = tasks.join_next().await {
        summary.record(finished);
    }

    Ok(summary)
}

async fn relocate_task<V, A, N>(
    ctx: AppContext<V, A, N>,
    config: Rc<RefCell<PolicyConfiguration>>,
    event: FileCreationEvent,
) -> RelocationReport
where
    V: Vault + Clone + Send + 'static,
    A: ActiveDocument,
    N: Notifier + Clone + Send + 'static,
{
    let snapshot = config.borrow().clone();
    let decision = relocate::decide_now(&ctx, &snapshot, &event);

    let RelocationDecision::Move(target) = &decision else {
        return RelocationReport::ignored();
    };

    let vault = ctx.vault().clone();
    let notifier = ctx.notifier().clone();
    let source = event.path.clone();
    let destination = target.clone();
    let moved = tokio::task::spawn_blocking(move || {
        relocate::execute(&vault, &notifier, &source, &destination)
    })
    .await;

    let outcome = moved.unwrap_or_else(|err| {
        tracing::error!(path = %event.path, error = %err, "move task did not complete");
        RelocationOutcome::failed(event.path.clone(), target.clone(), err.to_string())
    });

    RelocationReport { decision, outcome: Some(outcome) }
}

fn reload_settings(store: &impl SettingsStore, config: &RefCell<PolicyConfiguration>) {
    match settings::load(store) {
        Ok(next) => {
            tracing::info!(
                public_folder = %next.public_folder,
                public_attachment_folder = %next.public_attachment_folder,
                "settings reloaded"
            );
            *config.borrow_mut() = next;
        }
        Err(err) => tracing::warn!(error = %err, "keeping previous settings"),
    }
}
