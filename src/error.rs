//! Error types for launcher configuration operations.

use thiserror::Error;

/// Primary error type for configuration store and registry operations.
#[derive(Error, Debug)]
pub enum ConfError {
    // Configuration file errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Invalid configuration name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Rename target already exists: {path}")]
    RenameConflict { path: String },

    // Preference store errors
    #[error("Preference store is corrupt: {0}")]
    PrefsCorrupt(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl ConfError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::InvalidName { .. } | Self::RenameConflict { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => Some("Check that the configuration file still exists"),
            Self::InvalidName { .. } => Some("Use a bare file name without path separators"),
            Self::RenameConflict { .. } => Some("Pick a name that is not already in use"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using ConfError.
pub type Result<T> = std::result::Result<T, ConfError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| ConfError::Other(format!("{}: {e}", f().into())))
    }
}
