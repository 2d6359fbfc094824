//! Vehicle identification number coder.
//!
//! Assembles a 17 character pseudo-VIN:
//!
//! ```text
//! WMI(3) VDS(5) check(1) year(1) plant(1) serial(6)
//! ```
//!
//! The check digit is a random digit, not the ISO 3779 checksum.

use crate::format::{
    is_vin_char, random_digits, random_from_charset, zero_pad, DIGITS, VIN_CHARSET,
};
use crate::source::{default_rng, RandomSource};
use crate::strategy::CoderStrategy;
use markkit_core::{CoderConfiguration, CoderError, ConfigReader, ConfigValidationError};

/// Total length of every generated VIN
pub const VIN_LENGTH: usize = 17;

/// Width of the serial section
pub const VIN_SERIAL_WIDTH: usize = 6;

/// Largest sequential serial
pub const VIN_SERIAL_MAX: i64 = 999_999;

const WMI_LENGTH: usize = 3;
const WMI_PAD: char = 'A';

/// Generates VIN-shaped codes with a configurable manufacturer prefix
#[derive(Debug, Clone)]
pub struct VinCoder {
    pub wmi_prefix: String,
    pub use_sequential: bool,
    pub sequential_start: i64,
    sequential_counter: i64,
    rng: Box<dyn RandomSource>,
}

impl Default for VinCoder {
    fn default() -> Self {
        Self::with_rng(default_rng())
    }
}

impl VinCoder {
    pub const TYPE_NAME: &'static str = "VIN Code";

    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Self {
            wmi_prefix: "1HG".to_string(),
            use_sequential: false,
            sequential_start: 1,
            sequential_counter: 1,
            rng,
        }
    }

    /// Serial the next sequential VIN will carry
    pub fn sequential_counter(&self) -> i64 {
        self.sequential_counter
    }

    /// The three WMI characters, upper-cased and padded with `A`.
    ///
    /// Characters outside the VIN alphabet are dropped, so a prefix set
    /// directly on the field can never put I, O or Q into a code.
    pub fn wmi(&self) -> String {
        let mut wmi: String = self
            .wmi_prefix
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| is_vin_char(*c))
            .take(WMI_LENGTH)
            .collect();
        while wmi.chars().count() < WMI_LENGTH {
            wmi.push(WMI_PAD);
        }
        wmi
    }

    fn next_serial(&mut self) -> String {
        if !self.use_sequential {
            return random_digits(&mut self.rng, VIN_SERIAL_WIDTH);
        }
        let start = self.sequential_start.clamp(0, VIN_SERIAL_MAX);
        if !(0..=VIN_SERIAL_MAX).contains(&self.sequential_counter) {
            self.sequential_counter = start;
        }
        let serial = zero_pad(self.sequential_counter, VIN_SERIAL_WIDTH);
        if self.sequential_counter >= VIN_SERIAL_MAX {
            tracing::warn!(
                "VIN serial counter passed {}, wrapping to {}",
                VIN_SERIAL_MAX,
                start
            );
            self.sequential_counter = start;
        } else {
            self.sequential_counter += 1;
        }
        serial
    }

    fn validate(&self) -> Result<(), ConfigValidationError> {
        let prefix: String = self.wmi_prefix.chars().filter(|c| !c.is_whitespace()).collect();
        if prefix
            .chars()
            .take(WMI_LENGTH)
            .any(|c| !is_vin_char(c.to_ascii_uppercase()))
        {
            return Err(ConfigValidationError::IllegalCharacters {
                key: "wmiPrefix".to_string(),
                value: self.wmi_prefix.clone(),
            });
        }
        for (key, value) in [
            ("sequentialStart", self.sequential_start),
            ("sequentialCounter", self.sequential_counter),
        ] {
            if !(0..=VIN_SERIAL_MAX).contains(&value) {
                return Err(ConfigValidationError::out_of_range(
                    key,
                    format!("must be between 0 and {}", VIN_SERIAL_MAX),
                ));
            }
        }
        Ok(())
    }
}

impl CoderStrategy for VinCoder {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn generate_code(&mut self) -> String {
        let mut vin = String::with_capacity(VIN_LENGTH);
        vin.push_str(&self.wmi());
        vin.push_str(&random_from_charset(&mut self.rng, VIN_CHARSET, 5));
        vin.push_str(&random_from_charset(&mut self.rng, DIGITS, 1));
        vin.push_str(&random_from_charset(&mut self.rng, VIN_CHARSET, 1));
        vin.push_str(&random_from_charset(&mut self.rng, VIN_CHARSET, 1));
        vin.push_str(&self.next_serial());
        vin
    }

    fn preview(&self) -> String {
        let vin = self.clone().generate_code();
        let mode = if self.use_sequential {
            "sequential"
        } else {
            "random"
        };
        format!("{} ({})", vin, mode)
    }

    fn configuration(&self) -> CoderConfiguration {
        CoderConfiguration::new()
            .with("wmiPrefix", self.wmi_prefix.as_str())
            .with("useSequential", self.use_sequential)
            .with("sequentialStart", self.sequential_start)
            .with("sequentialCounter", self.sequential_counter)
    }

    fn set_configuration(&mut self, config: &CoderConfiguration) -> Result<(), CoderError> {
        let mut reader = ConfigReader::new(config);
        let mut candidate = self.clone();

        if let Some(v) = reader.text("wmiPrefix") {
            candidate.wmi_prefix = v.to_string();
        }
        if let Some(v) = reader.bool("useSequential") {
            candidate.use_sequential = v;
        }
        if let Some(v) = reader.int("sequentialStart") {
            candidate.sequential_start = v;
            candidate.sequential_counter = v;
        }
        if let Some(v) = reader.int("sequentialCounter") {
            candidate.sequential_counter = v;
        }

        candidate.validate()?;
        *self = candidate;
        reader.finish()?;
        tracing::debug!(
            "VIN coder configured: wmi={}, sequential={}, counter={}",
            self.wmi(),
            self.use_sequential,
            self.sequential_counter
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.sequential_counter = self.sequential_start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::seeded_rng;

    fn coder() -> VinCoder {
        VinCoder::with_rng(seeded_rng(17))
    }

    #[test]
    fn test_layout() {
        let mut coder = coder();
        for _ in 0..200 {
            let vin = coder.generate_code();
            assert_eq!(vin.len(), VIN_LENGTH);
            assert!(vin.starts_with("1HG"));
            assert!(vin.chars().all(is_vin_char), "{}", vin);
            assert!(vin[8..9].chars().all(|c| c.is_ascii_digit()));
            assert!(vin[11..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_short_prefix_is_padded() {
        let mut coder = coder();
        coder.wmi_prefix = "w".to_string();
        assert_eq!(coder.wmi(), "WAA");
        coder.wmi_prefix = String::new();
        assert_eq!(coder.wmi(), "AAA");
        assert_eq!(coder.generate_code().len(), VIN_LENGTH);
    }

    #[test]
    fn test_long_prefix_is_truncated() {
        let mut coder = coder();
        coder.wmi_prefix = "jhmcm56".to_string();
        assert_eq!(coder.wmi(), "JHM");
        assert!(coder.generate_code().starts_with("JHM"));
    }

    #[test]
    fn test_illegal_prefix_field_never_reaches_output() {
        let mut coder = coder();
        coder.wmi_prefix = "i-oq1h".to_string();
        assert_eq!(coder.wmi(), "1HA");
        let vin = coder.generate_code();
        assert_eq!(vin.len(), VIN_LENGTH);
        assert!(vin.chars().all(is_vin_char), "{}", vin);
    }

    #[test]
    fn test_sequential_serial() {
        let mut coder = coder();
        coder
            .set_configuration(
                &CoderConfiguration::new()
                    .with("useSequential", true)
                    .with("sequentialStart", 41),
            )
            .unwrap();
        let serials: Vec<String> = coder
            .generate_batch(3)
            .iter()
            .map(|vin| vin[11..].to_string())
            .collect();
        assert_eq!(serials, vec!["000041", "000042", "000043"]);

        coder.reset();
        assert_eq!(coder.sequential_counter(), 41);
    }

    #[test]
    fn test_sequential_wraps_to_start() {
        let mut coder = coder();
        coder.use_sequential = true;
        coder
            .set_configuration(&CoderConfiguration::new().with("sequentialCounter", VIN_SERIAL_MAX))
            .unwrap();
        let last = coder.generate_code();
        assert!(last.ends_with("999999"));
        let wrapped = coder.generate_code();
        assert!(wrapped.ends_with("000001"));
        assert_eq!(wrapped.len(), VIN_LENGTH);
    }

    #[test]
    fn test_out_of_range_start_field_keeps_length() {
        let mut coder = coder();
        coder.use_sequential = true;
        coder.sequential_start = 5_000_000;
        coder.reset();
        let vin = coder.generate_code();
        assert_eq!(vin.len(), VIN_LENGTH);
        assert!(vin.ends_with("999999"));
    }

    #[test]
    fn test_preview_does_not_advance() {
        let mut coder = coder();
        coder.use_sequential = true;
        let preview = coder.preview();
        assert!(preview.ends_with("000001 (sequential)"));
        assert_eq!(coder.sequential_counter(), 1);

        let vin = coder.generate_code();
        assert_eq!(preview, format!("{} (sequential)", vin));
    }

    #[test]
    fn test_illegal_prefix_is_rejected() {
        let mut coder = coder();
        for bad in ["1OG", "Q", "A-B", "ÄBC"] {
            let err = coder
                .set_configuration(&CoderConfiguration::new().with("wmiPrefix", bad))
                .unwrap_err();
            assert!(err.is_validation(), "{}", bad);
            assert_eq!(coder.wmi_prefix, "1HG");
        }
    }

    #[test]
    fn test_counter_out_of_range_is_rejected() {
        let mut coder = coder();
        let err = coder
            .set_configuration(&CoderConfiguration::new().with("sequentialCounter", 1_000_000))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(coder.sequential_counter(), 1);
    }
}
