//! MarkKit Settings Crate
//!
//! Toolkit-agnostic settings surfaces for coders and persistence of the
//! coder fields a document carries.

pub mod controller;
pub mod error;
pub mod persistence;
pub mod schema;

pub use controller::{CoderSettingsController, SettingUiModel};
pub use error::{SettingsError, SettingsResult};
pub use persistence::{default_store_path, CoderField, CoderFieldStore};
pub use schema::{field, schema_for, FieldKind, FieldSchema};
