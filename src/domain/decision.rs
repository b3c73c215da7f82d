//! Relocation decision procedure.

use super::attachment::is_managed_attachment;
use super::event::FileCreationEvent;
use super::policy::PolicyConfiguration;
use super::vault_path::{is_within, normalize_vault_path};

/// What to do with a newly created entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocationDecision {
    Ignore,
    Move(String),
}

/// Decide whether `event` should be moved into the public attachment folder.
///
/// `active_document` stands in for the note the attachment was inserted
/// into; creation events carry no link to the edit that produced them.
pub fn decide(
    event: &FileCreationEvent,
    active_document: Option<&str>,
    config: &PolicyConfiguration,
) -> RelocationDecision {
    if event.is_directory {
        tracing::debug!(path = %event.path, "skip: directory");
        return RelocationDecision::Ignore;
    }

    if !is_managed_attachment(&event.extension) {
        tracing::debug!(path = %event.path, extension = %event.extension, "skip: not an attachment");
        return RelocationDecision::Ignore;
    }

    let Some(note) = active_document else {
        tracing::debug!(path = %event.path, "skip: no active document");
        return RelocationDecision::Ignore;
    };

    if !is_within(note, &config.public_folder) {
        tracing::debug!(path = %event.path, note, "skip: active note is not public");
        return RelocationDecision::Ignore;
    }

    let attachment_folder = normalize_vault_path(&config.public_attachment_folder);
    if is_within(&event.path, &attachment_folder) {
        tracing::debug!(path = %event.path, "skip: already in public attachment folder");
        return RelocationDecision::Ignore;
    }

    let target = normalize_vault_path(&format!("{}/{}", config.public_attachment_folder, event.name));
    RelocationDecision::Move(target)
}
