//! Error handling for MarkKit
//!
//! Provides the error types shared by every coder and by the hosts that
//! drive them:
//! - Validation errors (a configuration breaks a coder constraint)
//! - Import errors (individual keys of an imported map had the wrong type)
//! - Registry errors (lookup and registration of coder types)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::config::ValueKind;
use thiserror::Error;

/// Configuration validation error
///
/// Raised when applying a configuration would leave a coder in a state that
/// violates one of its constraints. The coder keeps its previous configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// A single value is outside its permitted range
    #[error("Value out of range for '{key}': {reason}")]
    OutOfRange {
        /// The offending configuration key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A lower bound is greater than its upper bound
    #[error("Inverted range: '{min_key}' ({min}) is greater than '{max_key}' ({max})")]
    InvertedRange {
        /// Key holding the lower bound.
        min_key: String,
        /// Key holding the upper bound.
        max_key: String,
        /// The lower bound value.
        min: i64,
        /// The upper bound value.
        max: i64,
    },

    /// A text value contains characters the coder cannot emit
    #[error("Illegal characters in '{key}': {value}")]
    IllegalCharacters {
        /// The offending configuration key.
        key: String,
        /// The rejected value.
        value: String,
    },
}

impl ConfigValidationError {
    /// Create an out-of-range error
    pub fn out_of_range(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// The configuration key a host should attach the message to
    pub fn key(&self) -> &str {
        match self {
            Self::OutOfRange { key, .. } => key,
            Self::InvertedRange { min_key, .. } => min_key,
            Self::IllegalCharacters { key, .. } => key,
        }
    }
}

/// A configuration key that was skipped during import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedKey {
    /// The key that was skipped.
    pub key: String,
    /// The value kind the coder expects for this key.
    pub expected: ValueKind,
    /// The value kind that was supplied.
    pub found: ValueKind,
}

impl std::fmt::Display for SkippedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (expected {}, found {})",
            self.key, self.expected, self.found
        )
    }
}

/// Configuration import error
///
/// Keys with the wrong value type are skipped; every other key of the same
/// import has still been applied when this error is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Skipped {} configuration key(s): {}", .skipped.len(), list_keys(.skipped))]
pub struct ConfigImportError {
    /// The keys that were not applied.
    pub skipped: Vec<SkippedKey>,
}

fn list_keys(skipped: &[SkippedKey]) -> String {
    skipped
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigImportError {
    /// Names of the skipped keys, in the order they were encountered
    pub fn keys(&self) -> Vec<&str> {
        self.skipped.iter().map(|k| k.key.as_str()).collect()
    }
}

/// Error returned by `set_configuration` on any coder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoderError {
    /// The resulting configuration was invalid and nothing was applied
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    /// Some keys were skipped; the rest were applied
    #[error(transparent)]
    Import(#[from] ConfigImportError),
}

impl CoderError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, CoderError::Validation(_))
    }

    /// Check if this is an import error
    pub fn is_import(&self) -> bool {
        matches!(self, CoderError::Import(_))
    }
}

/// Registry error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No coder type is registered under this name
    #[error("Unknown coder type: {0}")]
    UnknownType(String),

    /// A coder type with this name is already registered
    #[error("Coder type already registered: {0}")]
    DuplicateType(String),
}

/// Main error type for MarkKit
///
/// A unified error type that can represent any error from the coder layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Coder configuration error
    #[error(transparent)]
    Coder(#[from] CoderError),

    /// Registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<ConfigValidationError> for Error {
    fn from(err: ConfigValidationError) -> Self {
        Error::Coder(err.into())
    }
}

impl From<ConfigImportError> for Error {
    fn from(err: ConfigImportError) -> Self {
        Error::Coder(err.into())
    }
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
