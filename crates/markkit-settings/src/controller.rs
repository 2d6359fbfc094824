//! Coder Settings Controller
//!
//! Handles interaction between a settings surface and a coder.
//! Turns text edits into configuration changes, keeps field-level error
//! messages for the surface to show, and notifies listeners of changes.

use crate::error::{SettingsError, SettingsResult};
use crate::schema::{field, schema_for, FieldKind, FieldSchema};
use markkit_coders::{Coder, CoderStrategy, CoderType};
use markkit_core::{shared, CoderConfiguration, SettingChangedCallback, Shared, SharedVec};
use std::collections::HashMap;
use std::rc::Rc;

/// UI-friendly representation of a coder setting
#[derive(Debug, Clone)]
pub struct SettingUiModel {
    pub id: String,
    pub name: String,
    pub value: String,
    pub value_type: String,
    pub description: String,
    pub options: Vec<String>,
    pub current_index: i32,
    pub runtime: bool,
    /// Why the last edit of this setting was refused
    pub error: Option<String>,
}

/// Controller for one coder's settings
pub struct CoderSettingsController {
    coder: Shared<Coder>,
    committed: Shared<CoderConfiguration>,
    errors: Shared<HashMap<String, String>>,
    listeners: SharedVec<SettingChangedCallback>,
}

impl CoderSettingsController {
    /// Create a controller; the coder's current configuration becomes the committed state
    pub fn new(coder: Coder) -> Self {
        Self::with_shared(shared(coder))
    }

    /// Create a controller over a coder the host keeps a handle to
    pub fn with_shared(coder: Shared<Coder>) -> Self {
        let committed = coder.borrow().configuration();
        Self {
            coder,
            committed: shared(committed),
            errors: shared(HashMap::new()),
            listeners: shared(Vec::new()),
        }
    }

    /// The coder being edited
    pub fn coder(&self) -> Shared<Coder> {
        Rc::clone(&self.coder)
    }

    pub fn coder_type(&self) -> CoderType {
        self.coder.borrow().coder_type()
    }

    /// Register a callback to be notified when a setting changes
    pub fn on_setting_changed<F>(&self, callback: F)
    where
        F: Fn(&str, &str) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(callback));
    }

    /// Get settings formatted for UI display, optionally including runtime counters
    pub fn get_settings_for_ui(&self, include_runtime: bool) -> Vec<SettingUiModel> {
        let config = self.coder.borrow().configuration();
        let errors = self.errors.borrow();

        schema_for(self.coder_type())
            .into_iter()
            .filter(|f| include_runtime || !f.runtime)
            .map(|f| {
                let value = config
                    .get(f.id)
                    .map(|v| v.to_string())
                    .unwrap_or_default();

                let (options, current_index) = match &f.kind {
                    FieldKind::Choice(opts) => {
                        let index = opts.iter().position(|o| *o == value).unwrap_or(0) as i32;
                        (opts.clone(), index)
                    }
                    _ => (Vec::new(), 0),
                };

                SettingUiModel {
                    id: f.id.to_string(),
                    name: f.label.to_string(),
                    value,
                    value_type: f.kind.to_string(),
                    description: f.description.to_string(),
                    options,
                    current_index,
                    runtime: f.runtime,
                    error: errors.get(f.id).cloned(),
                }
            })
            .collect()
    }

    /// Update a setting value from string input.
    ///
    /// A refused edit leaves the coder untouched and records a message
    /// under the setting's id.
    pub fn update_setting(&self, id: &str, value: &str) -> SettingsResult<()> {
        let schema = self.schema(id)?;

        let Some(parsed) = schema.kind.parse(value) else {
            let err = SettingsError::InvalidInput {
                key: id.to_string(),
                value: value.to_string(),
                expected: schema.kind.value_kind().to_string(),
            };
            self.record_error(id, &err);
            return Err(err);
        };

        let before = self.coder.borrow().configuration();
        let result = self
            .coder
            .borrow_mut()
            .set_configuration(&CoderConfiguration::new().with(id, parsed));

        if let Err(err) = result {
            let err = SettingsError::from(err);
            self.record_error(id, &err);
            return Err(err);
        }

        self.errors.borrow_mut().remove(id);
        self.notify_changes(&before);
        Ok(())
    }

    /// Error message recorded for a setting, if its last edit was refused
    pub fn field_error(&self, id: &str) -> Option<String> {
        self.errors.borrow().get(id).cloned()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.borrow().is_empty()
    }

    /// Whether the coder differs from the committed configuration
    pub fn has_unsaved_changes(&self) -> bool {
        self.coder.borrow().configuration() != *self.committed.borrow()
    }

    /// Preview of the next code
    pub fn preview(&self) -> String {
        self.coder.borrow().preview()
    }

    /// Produce a code and advance the coder
    pub fn generate_code(&self) -> String {
        let before = self.coder.borrow().configuration();
        let code = self.coder.borrow_mut().generate_code();
        self.notify_changes(&before);
        code
    }

    /// Rewind the coder's counters
    pub fn reset(&self) {
        let before = self.coder.borrow().configuration();
        self.coder.borrow_mut().reset();
        self.notify_changes(&before);
    }

    /// Accept the current configuration as the state `discard_changes` returns to
    pub fn commit(&self) -> CoderConfiguration {
        let config = self.coder.borrow().configuration();
        *self.committed.borrow_mut() = config.clone();
        self.errors.borrow_mut().clear();
        config
    }

    /// Discard unsaved changes and restore the committed configuration.
    pub fn discard_changes(&self) -> SettingsResult<()> {
        let before = self.coder.borrow().configuration();
        let committed = self.committed.borrow().clone();
        self.coder.borrow_mut().set_configuration(&committed)?;
        self.errors.borrow_mut().clear();
        self.notify_changes(&before);
        Ok(())
    }

    fn schema(&self, id: &str) -> SettingsResult<FieldSchema> {
        field(self.coder_type(), id).ok_or_else(|| SettingsError::UnknownSetting(id.to_string()))
    }

    fn record_error(&self, id: &str, err: &SettingsError) {
        tracing::debug!("Refused setting {}: {}", id, err);
        self.errors.borrow_mut().insert(id.to_string(), err.to_string());
    }

    fn notify_changes(&self, before: &CoderConfiguration) {
        let after = self.coder.borrow().configuration();
        let listeners = self.listeners.borrow();
        for (id, new_val) in after.iter() {
            if before.get(id) != Some(new_val) {
                let text = new_val.to_string();
                for listener in listeners.iter() {
                    listener(id, &text);
                }
            }
        }
    }
}
