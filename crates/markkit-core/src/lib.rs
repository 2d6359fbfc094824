//! # MarkKit Core
//!
//! Core types and utilities for MarkKit.
//! Provides the error taxonomy, the key-value configuration model every
//! coder exports and imports, and shared-ownership aliases.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CoderConfiguration, ConfigReader, ConfigValue, ValueKind};

pub use error::{
    CoderError, ConfigImportError, ConfigValidationError, Error, RegistryError, Result, SkippedKey,
};

pub use types::{shared, thread_safe, SettingChangedCallback, Shared, SharedVec, ThreadSafe};
