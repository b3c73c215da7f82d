use std::io;

use thiserror::Error;

/// Library-wide error type for divat operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value rejected or unusable.
    #[error("{0}")]
    Configuration(String),

    /// Path resolves outside the vault root.
    #[error("Path '{0}' escapes the vault root")]
    PathTraversal(String),

    /// Event path could not be turned into a vault entry.
    #[error("Invalid event path '{0}'")]
    InvalidEventPath(String),

    /// File to move does not exist.
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    /// Destination of a move is already occupied.
    #[error("A file already exists at {0}")]
    TargetOccupied(String),

    /// Filesystem watcher failure.
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Async runtime could not be started.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::PathTraversal(_)
            | AppError::InvalidEventPath(_)
            | AppError::TomlParse(_)
            | AppError::TomlSerialize(_) => io::ErrorKind::InvalidInput,
            AppError::SourceNotFound(_) => io::ErrorKind::NotFound,
            AppError::TargetOccupied(_) => io::ErrorKind::AlreadyExists,
            AppError::Watch(_) | AppError::Runtime(_) => io::ErrorKind::Other,
        }
    }
}
