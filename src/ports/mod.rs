mod active_document;
mod notifier;
mod settings_store;
mod vault;

pub use active_document::ActiveDocument;
pub use notifier::Notifier;
pub use settings_store::SettingsStore;
pub use vault::Vault;
