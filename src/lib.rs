//! divat: move attachments pasted into public notes into the public attachments folder.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    RelocationReport, WatchSummary, relocate_at, settings_show_at, settings_update_at, watch_at,
};
pub use domain::{
    AppError, FileCreationEvent, PolicyConfiguration, PolicyUpdate, RelocationDecision,
    RelocationOutcome, decide, is_managed_attachment,
};
