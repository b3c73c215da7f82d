use crate::ports::{ActiveDocument, Notifier, Vault};

/// Application context holding the collaborators a relocation needs.
#[derive(Debug, Clone)]
pub struct AppContext<V: Vault, A: ActiveDocument, N: Notifier> {
    vault: V,
    active_document: A,
    notifier: N,
}

impl<V: Vault, A: ActiveDocument, N: Notifier> AppContext<V, A, N> {
    /// Create a new application context.
    pub fn new(vault: V, active_document: A, notifier: N) -> Self {
        Self { vault, active_document, notifier }
    }

    /// Get a reference to the vault.
    pub fn vault(&self) -> &V {
        &self.vault
    }

    /// Get a reference to the active-document resolver.
    pub fn active_document(&self) -> &A {
        &self.active_document
    }

    /// Get a reference to the notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
