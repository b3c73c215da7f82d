//! Concrete adapters for the vault ports.

pub mod active_document;
pub mod console_notifier;
pub mod filesystem;
pub mod watcher;

pub use active_document::{ActiveDocumentSource, ObsidianWorkspace, PinnedDocument};
pub use console_notifier::ConsoleNotifier;
pub use filesystem::VaultStore;
pub use watcher::{VaultSignal, VaultWatcher};
