//! Error types for the settings crate.
//!
//! Covers loading and saving coder field stores, and turning text typed
//! into a settings surface into coder configuration.

use markkit_core::{CoderError, RegistryError};
use std::io;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The store file could not be loaded.
    #[error("Failed to load coder fields: {0}")]
    LoadError(String),

    /// The store file could not be saved.
    #[error("Failed to save coder fields: {0}")]
    SaveError(String),

    /// The store file extension is neither `.json` nor `.toml`.
    #[error("Unsupported store format: {0}")]
    UnsupportedFormat(String),

    /// The configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// The coder has no setting with this id.
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// Text entered for a setting does not parse as the setting's kind.
    #[error("Invalid value '{value}' for '{key}': expected {expected}")]
    InvalidInput {
        key: String,
        value: String,
        expected: String,
    },

    /// No coder field with this id exists in the store.
    #[error("Unknown coder field: {0}")]
    UnknownField(Uuid),

    /// A stored field could not be turned back into a working coder.
    #[error("Coder field '{name}' is invalid: {source}")]
    InvalidField {
        name: String,
        #[source]
        source: CoderError,
    },

    /// The coder rejected a configuration.
    #[error(transparent)]
    Coder(#[from] CoderError),

    /// The registry has no factory for a stored coder type.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl SettingsError {
    /// Whether the error came from a coder refusing its configuration
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Coder(err) | Self::InvalidField { source: err, .. } => err.is_validation(),
            _ => false,
        }
    }
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
