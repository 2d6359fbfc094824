//! The contract every coder implements.

use markkit_core::{CoderConfiguration, CoderError};

/// A pluggable code generator for one marking field
///
/// `generate_code` never fails once a configuration has been accepted;
/// invalid configurations are rejected by `set_configuration` instead.
pub trait CoderStrategy {
    /// Human-readable type name, e.g. "Serial Number"
    fn type_name(&self) -> &'static str;

    /// Produce the next code. Counter-based coders advance their state.
    fn generate_code(&mut self) -> String;

    /// Describe the next code with some context for display.
    ///
    /// Never changes the state of the coder: the next call to
    /// `generate_code` returns the same value it would have without the
    /// preview.
    fn preview(&self) -> String;

    /// Whether the coder exposes settings a user is expected to fill in
    fn requires_configuration(&self) -> bool {
        true
    }

    /// Export everything needed to reproduce the current behavior,
    /// runtime counters included
    fn configuration(&self) -> CoderConfiguration;

    /// Apply the keys present in `config`.
    ///
    /// Absent keys keep their value and unknown keys are ignored. If the
    /// resulting configuration is invalid nothing changes and
    /// [`CoderError::Validation`] is returned. Keys with the wrong value type
    /// are skipped, the rest are applied, and [`CoderError::Import`] lists
    /// the skipped keys.
    fn set_configuration(&mut self, config: &CoderConfiguration) -> Result<(), CoderError>;

    /// Return runtime counters to their configured starting point
    fn reset(&mut self) {}

    /// Generate `count` consecutive codes, one per item to be marked
    fn generate_batch(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate_code()).collect()
    }
}
