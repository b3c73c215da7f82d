/// Port for querying which note the user is working in.
///
/// Implementations must read current state on every call; the answer can
/// change between two creation events.
pub trait ActiveDocument {
    /// Vault path of the focused note, if any.
    fn current_active_document_path(&self) -> Option<String>;
}
