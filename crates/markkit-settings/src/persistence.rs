//! Coder Field Persistence
//!
//! Loads and saves the coder fields of a document. Each field stores its
//! coder type and exported configuration, including runtime counters, so a
//! serial sequence continues where the last print run stopped.

use crate::error::{SettingsError, SettingsResult};
use markkit_coders::{Coder, CoderRegistry, CoderStrategy, CoderType};
use markkit_core::{CoderConfiguration, CoderError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const APP_DIR: &str = "markkit";
const STORE_FILE: &str = "coders.json";

/// A named marking field and the saved state of its coder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoderField {
    pub id: Uuid,
    pub name: String,
    pub coder_type: CoderType,
    #[serde(default)]
    pub configuration: CoderConfiguration,
}

impl CoderField {
    pub fn new(
        name: impl Into<String>,
        coder_type: CoderType,
        configuration: CoderConfiguration,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            coder_type,
            configuration,
        }
    }

    /// Capture a live coder as a new field
    pub fn from_coder(name: impl Into<String>, coder: &Coder) -> Self {
        Self::new(name, coder.coder_type(), coder.configuration())
    }
}

/// Ordered collection of coder fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoderFieldStore {
    #[serde(default)]
    fields: Vec<CoderField>,
}

enum StoreFormat {
    Json,
    Toml,
}

impl StoreFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (store file must be .json or .toml)",
                path.display()
            ))),
        }
    }
}

impl CoderFieldStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// One field of every built-in coder type with default settings
    pub fn demo() -> Self {
        let mut store = Self::new();
        for coder_type in CoderType::ALL {
            store.add(CoderField::from_coder(
                coder_type.name(),
                &coder_type.create(),
            ));
        }
        store
    }

    /// Append a field, returning its id
    pub fn add(&mut self, field: CoderField) -> Uuid {
        let id = field.id;
        self.fields.push(field);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&CoderField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut CoderField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Remove a field, returning it if present
    pub fn remove(&mut self, id: Uuid) -> Option<CoderField> {
        let index = self.fields.iter().position(|f| f.id == id)?;
        Some(self.fields.remove(index))
    }

    pub fn fields(&self) -> &[CoderField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a working coder for every field.
    ///
    /// Keys of the wrong type are skipped with a warning and the rest of
    /// the field still applies. A configuration the coder refuses fails
    /// the whole call.
    pub fn instantiate(&self, registry: &CoderRegistry) -> SettingsResult<Vec<(Uuid, Coder)>> {
        let mut coders = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let mut coder = registry.create_by_type(field.coder_type)?;
            match coder.set_configuration(&field.configuration) {
                Ok(()) => {}
                Err(CoderError::Import(err)) => {
                    tracing::warn!("Coder field '{}': {}", field.name, err);
                }
                Err(source) => {
                    return Err(SettingsError::InvalidField {
                        name: field.name.clone(),
                        source,
                    });
                }
            }
            tracing::debug!("Instantiated {} coder for '{}'", field.coder_type, field.name);
            coders.push((field.id, coder));
        }
        Ok(coders)
    }

    /// Write a live coder's configuration, counters included, back to its field
    pub fn capture(&mut self, id: Uuid, coder: &Coder) -> SettingsResult<()> {
        let field = self.get_mut(id).ok_or(SettingsError::UnknownField(id))?;
        field.coder_type = coder.coder_type();
        field.configuration = coder.configuration();
        Ok(())
    }

    /// Load a store from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = StoreFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let store = match format {
            StoreFormat::Json => serde_json::from_str(&content)?,
            StoreFormat::Toml => toml::from_str(&content)?,
        };
        Ok(store)
    }

    /// Save the store to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = match StoreFormat::from_path(path)? {
            StoreFormat::Json => serde_json::to_string_pretty(self)?,
            StoreFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved {} coder fields to {}", self.len(), path.display());
        Ok(())
    }
}

/// Default store location: `<config dir>/markkit/coders.json`
pub fn default_store_path() -> SettingsResult<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("Could not determine config directory".to_string())
    })?;
    Ok(dir.join(APP_DIR).join(STORE_FILE))
}
