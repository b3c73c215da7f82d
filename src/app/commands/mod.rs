pub mod relocate;
pub mod settings;
pub mod watch;
