pub mod attachment;
pub mod decision;
pub mod error;
pub mod event;
pub mod links;
pub mod outcome;
pub mod policy;
pub mod vault_path;

pub use attachment::{MANAGED_EXTENSIONS, is_managed_attachment};
pub use decision::{RelocationDecision, decide};
pub use error::AppError;
pub use event::FileCreationEvent;
pub use outcome::RelocationOutcome;
pub use policy::{PolicyConfiguration, PolicyUpdate};
pub use vault_path::normalize_vault_path;
