//! Random number coder.

use crate::format::{digit_bounds, zero_pad};
use crate::source::{default_rng, RandomSource};
use crate::strategy::CoderStrategy;
use markkit_core::{CoderConfiguration, CoderError, ConfigReader, ConfigValidationError};
use rand::Rng;

/// Longest fixed length whose upper bound still fits in an `i64`
pub const MAX_RANDOM_LENGTH: u32 = 18;

/// Draws random numbers, either with an exact digit count or from a range
#[derive(Debug, Clone)]
pub struct RandomNumberCoder {
    pub fixed_length: bool,
    pub length: u32,
    pub min_value: i64,
    pub max_value: i64,
    rng: Box<dyn RandomSource>,
}

impl Default for RandomNumberCoder {
    fn default() -> Self {
        Self::with_rng(default_rng())
    }
}

impl RandomNumberCoder {
    pub const TYPE_NAME: &'static str = "Random Number";

    /// Defaults: fixed length of 6 digits; range 1 through 999999
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Self {
            fixed_length: true,
            length: 6,
            min_value: 1,
            max_value: 999_999,
            rng,
        }
    }

    fn length_error() -> ConfigValidationError {
        ConfigValidationError::out_of_range(
            "length",
            format!("must be between 1 and {}", MAX_RANDOM_LENGTH),
        )
    }

    fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(1..=MAX_RANDOM_LENGTH).contains(&self.length) {
            return Err(Self::length_error());
        }
        if self.min_value > self.max_value {
            return Err(ConfigValidationError::InvertedRange {
                min_key: "minValue".to_string(),
                max_key: "maxValue".to_string(),
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

impl CoderStrategy for RandomNumberCoder {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn generate_code(&mut self) -> String {
        if self.fixed_length {
            // Fields are public; an unvalidated length is clamped rather than trusted.
            let length = self.length.clamp(1, MAX_RANDOM_LENGTH);
            let (low, high) = digit_bounds(length);
            zero_pad(self.rng.random_range(low..=high), length as usize)
        } else {
            let low = self.min_value.min(self.max_value);
            let high = self.min_value.max(self.max_value);
            self.rng.random_range(low..=high).to_string()
        }
    }

    fn preview(&self) -> String {
        let value = self.clone().generate_code();
        if self.fixed_length {
            format!("{} ({} digits)", value, self.length)
        } else {
            format!("{} (range {}-{})", value, self.min_value, self.max_value)
        }
    }

    fn configuration(&self) -> CoderConfiguration {
        CoderConfiguration::new()
            .with("fixedLength", self.fixed_length)
            .with("length", self.length)
            .with("minValue", self.min_value)
            .with("maxValue", self.max_value)
    }

    fn set_configuration(&mut self, config: &CoderConfiguration) -> Result<(), CoderError> {
        let mut reader = ConfigReader::new(config);
        let mut candidate = self.clone();

        if let Some(v) = reader.bool("fixedLength") {
            candidate.fixed_length = v;
        }
        if let Some(v) = reader.int("length") {
            candidate.length = u32::try_from(v).map_err(|_| Self::length_error())?;
        }
        if let Some(v) = reader.int("minValue") {
            candidate.min_value = v;
        }
        if let Some(v) = reader.int("maxValue") {
            candidate.max_value = v;
        }

        candidate.validate()?;
        *self = candidate;
        reader.finish()?;
        tracing::debug!(
            "Random number coder configured: fixed_length={}, length={}, range={}..={}",
            self.fixed_length,
            self.length,
            self.min_value,
            self.max_value
        );
        Ok(())
    }
}
