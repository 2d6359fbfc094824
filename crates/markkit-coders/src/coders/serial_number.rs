//! Serial number coder.
//!
//! A bounded counter that emits each value `repeat_count` times before
//! advancing by `step_value`. When the counter passes `max_value` it either
//! wraps to `start_value` or saturates at `max_value` for good.

use crate::format::zero_pad;
use crate::strategy::CoderStrategy;
use markkit_core::{CoderConfiguration, CoderError, ConfigReader, ConfigValidationError};

/// Minimum number of digits in an emitted serial
pub const SERIAL_WIDTH: usize = 5;

/// Incrementing serial counter with repeat and wraparound control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialNumberCoder {
    pub start_value: i64,
    pub step_value: i64,
    pub max_value: i64,
    pub repeat_count: i64,
    pub reset_on_max: bool,
    current_value: i64,
    current_repeat: i64,
}

impl Default for SerialNumberCoder {
    fn default() -> Self {
        Self::new(1, 1, 99_999)
    }
}

impl SerialNumberCoder {
    pub const TYPE_NAME: &'static str = "Serial Number";

    /// Counter from `start` to `max` in increments of `step`, wrapping at the top
    pub fn new(start: i64, step: i64, max: i64) -> Self {
        Self {
            start_value: start,
            step_value: step,
            max_value: max,
            repeat_count: 1,
            reset_on_max: true,
            current_value: start,
            current_repeat: 0,
        }
    }

    /// The value the next call to `generate_code` will emit
    pub fn current_value(&self) -> i64 {
        self.current_value
    }

    /// How many times the current value has already been emitted
    pub fn current_repeat(&self) -> i64 {
        self.current_repeat
    }

    fn advance(&mut self) {
        self.current_repeat += 1;
        if self.current_repeat < self.repeat_count {
            return;
        }
        self.current_repeat = 0;

        let next = self.current_value.saturating_add(self.step_value.max(1));
        if next > self.max_value {
            if self.reset_on_max {
                tracing::debug!(
                    "Serial counter passed {}, wrapping to {}",
                    self.max_value,
                    self.start_value
                );
                self.current_value = self.start_value;
            } else {
                tracing::debug!("Serial counter held at {}", self.max_value);
                self.current_value = self.max_value;
            }
        } else {
            self.current_value = next;
        }
    }

    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.step_value < 1 {
            return Err(ConfigValidationError::out_of_range(
                "stepValue",
                "must be at least 1",
            ));
        }
        if self.repeat_count < 1 {
            return Err(ConfigValidationError::out_of_range(
                "repeatCount",
                "must be at least 1",
            ));
        }
        if self.start_value > self.max_value {
            return Err(ConfigValidationError::InvertedRange {
                min_key: "startValue".to_string(),
                max_key: "maxValue".to_string(),
                min: self.start_value,
                max: self.max_value,
            });
        }
        // A repeat at or past repeatCount is absorbed by the next advance.
        if self.current_repeat < 0 {
            return Err(ConfigValidationError::out_of_range(
                "currentRepeat",
                "must not be negative",
            ));
        }
        Ok(())
    }
}

impl CoderStrategy for SerialNumberCoder {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn generate_code(&mut self) -> String {
        let code = zero_pad(self.current_value, SERIAL_WIDTH);
        self.advance();
        code
    }

    fn preview(&self) -> String {
        let mut lookahead = self.clone();
        let value = lookahead.generate_code();
        let next = lookahead.generate_code();
        format!("{} (next: {})", value, next)
    }

    fn configuration(&self) -> CoderConfiguration {
        CoderConfiguration::new()
            .with("startValue", self.start_value)
            .with("stepValue", self.step_value)
            .with("maxValue", self.max_value)
            .with("repeatCount", self.repeat_count)
            .with("resetOnMax", self.reset_on_max)
            .with("currentValue", self.current_value)
            .with("currentRepeat", self.current_repeat)
    }

    /// Apply the keys present in `config`.
    ///
    /// Importing `startValue` also moves `currentValue` to the new start
    /// and clears `currentRepeat`, even when those keys are absent. Include
    /// them in the same import to keep a running sequence where it is.
    fn set_configuration(&mut self, config: &CoderConfiguration) -> Result<(), CoderError> {
        let mut reader = ConfigReader::new(config);
        let mut candidate = self.clone();

        if let Some(v) = reader.int("startValue") {
            candidate.start_value = v;
            candidate.current_value = v;
            candidate.current_repeat = 0;
        }
        if let Some(v) = reader.int("stepValue") {
            candidate.step_value = v;
        }
        if let Some(v) = reader.int("maxValue") {
            candidate.max_value = v;
        }
        if let Some(v) = reader.int("repeatCount") {
            candidate.repeat_count = v;
        }
        if let Some(v) = reader.bool("resetOnMax") {
            candidate.reset_on_max = v;
        }
        if let Some(v) = reader.int("currentValue") {
            candidate.current_value = v;
        }
        if let Some(v) = reader.int("currentRepeat") {
            candidate.current_repeat = v;
        }

        candidate.validate()?;
        *self = candidate;
        reader.finish()?;
        tracing::debug!(
            "Serial coder configured: start={}, step={}, max={}, repeat={}, current={}",
            self.start_value,
            self.step_value,
            self.max_value,
            self.repeat_count,
            self.current_value
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.current_value = self.start_value;
        self.current_repeat = 0;
    }
}
