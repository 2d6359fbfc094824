//! Date and time stamp coder.

use crate::format::julian_date;
use crate::source::{system_clock, SharedClock};
use crate::strategy::CoderStrategy;
use markkit_core::{CoderConfiguration, CoderError, ConfigReader, ConfigValue, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format of the date/time coder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateTimeFormat {
    /// `240305`
    #[default]
    YyMmDd,
    /// `20240305`
    YyyyMmDd,
    /// Two-digit year and ordinal day, `24065`
    JulianDate,
    /// `1407`
    HhMm,
    /// `140709`
    HhMmSs,
    /// `2024-03-05 14:07`
    FullDateTime,
}

impl DateTimeFormat {
    /// All formats in display order
    pub const ALL: [DateTimeFormat; 6] = [
        Self::YyMmDd,
        Self::YyyyMmDd,
        Self::JulianDate,
        Self::HhMm,
        Self::HhMmSs,
        Self::FullDateTime,
    ];

    /// Label shown to the user and stored in configurations
    pub fn label(&self) -> &'static str {
        match self {
            Self::YyMmDd => "YYMMDD",
            Self::YyyyMmDd => "YYYYMMDD",
            Self::JulianDate => "Julian Date",
            Self::HhMm => "HHMM",
            Self::HhMmSs => "HHMMSS",
            Self::FullDateTime => "Full Date/Time",
        }
    }

    /// Example output for 2024-03-05 14:07:09
    pub fn sample(&self) -> &'static str {
        match self {
            Self::YyMmDd => "240305",
            Self::YyyyMmDd => "20240305",
            Self::JulianDate => "24065",
            Self::HhMm => "1407",
            Self::HhMmSs => "140709",
            Self::FullDateTime => "2024-03-05 14:07",
        }
    }

    /// Position within [`DateTimeFormat::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Format by index; out-of-range indices fall back to YYMMDD
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DateTimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "YYMMDD" => Ok(Self::YyMmDd),
            "YYYYMMDD" => Ok(Self::YyyyMmDd),
            "JULIANDATE" | "JULIAN" => Ok(Self::JulianDate),
            "HHMM" => Ok(Self::HhMm),
            "HHMMSS" => Ok(Self::HhMmSs),
            "FULLDATETIME" => Ok(Self::FullDateTime),
            _ => Err(format!("Unknown date/time format: {}", s)),
        }
    }
}

/// Stamps the current date and/or time in a selectable format
#[derive(Debug, Clone)]
pub struct DateTimeCoder {
    pub format: DateTimeFormat,
    clock: SharedClock,
}

impl Default for DateTimeCoder {
    fn default() -> Self {
        Self::with_clock(system_clock())
    }
}

impl DateTimeCoder {
    pub const TYPE_NAME: &'static str = "Date/Time";

    pub fn new(format: DateTimeFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Use `clock` instead of the system clock
    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            format: DateTimeFormat::default(),
            clock,
        }
    }

    fn render(&self) -> String {
        let now = self.clock.now();
        match self.format {
            DateTimeFormat::YyMmDd => now.format("%y%m%d").to_string(),
            DateTimeFormat::YyyyMmDd => now.format("%Y%m%d").to_string(),
            DateTimeFormat::JulianDate => julian_date(now.date()),
            DateTimeFormat::HhMm => now.format("%H%M").to_string(),
            DateTimeFormat::HhMmSs => now.format("%H%M%S").to_string(),
            DateTimeFormat::FullDateTime => now.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl CoderStrategy for DateTimeCoder {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn generate_code(&mut self) -> String {
        self.render()
    }

    fn preview(&self) -> String {
        format!("{} ({})", self.render(), self.format.label())
    }

    fn configuration(&self) -> CoderConfiguration {
        CoderConfiguration::new().with("format", self.format.label())
    }

    fn set_configuration(&mut self, config: &CoderConfiguration) -> Result<(), CoderError> {
        let mut reader = ConfigReader::new(config);
        match reader.raw("format") {
            Some(ConfigValue::Text(name)) => {
                self.format = name.parse().unwrap_or_else(|_| {
                    tracing::warn!("Unknown date/time format {}, defaulting to YYMMDD", name);
                    DateTimeFormat::YyMmDd
                });
            }
            Some(ConfigValue::Integer(index)) => {
                self.format = DateTimeFormat::from_index(*index);
            }
            Some(ConfigValue::Boolean(_)) => reader.skip("format", ValueKind::Text),
            None => {}
        }
        reader.finish()?;
        tracing::debug!("Date/time coder format set to {}", self.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FixedClock;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn coder_at(format: DateTimeFormat) -> DateTimeCoder {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap();
        let mut coder = DateTimeCoder::with_clock(Arc::new(FixedClock(at)));
        coder.format = format;
        coder
    }

    #[test]
    fn test_every_format_matches_its_sample() {
        for format in DateTimeFormat::ALL {
            let mut coder = coder_at(format);
            assert_eq!(coder.generate_code(), format.sample(), "{}", format);
        }
    }

    #[test]
    fn test_preview_includes_label() {
        let coder = coder_at(DateTimeFormat::JulianDate);
        assert_eq!(coder.preview(), "24065 (Julian Date)");
    }

    #[test]
    fn test_format_by_name_and_index() {
        let mut coder = coder_at(DateTimeFormat::YyMmDd);
        coder
            .set_configuration(&CoderConfiguration::new().with("format", "HHMMSS"))
            .unwrap();
        assert_eq!(coder.generate_code(), "140709");

        coder
            .set_configuration(&CoderConfiguration::new().with("format", 1))
            .unwrap();
        assert_eq!(coder.format, DateTimeFormat::YyyyMmDd);
    }

    #[test]
    fn test_unknown_format_falls_back_to_yymmdd() {
        let mut coder = coder_at(DateTimeFormat::HhMm);
        coder
            .set_configuration(&CoderConfiguration::new().with("format", "MM/DD"))
            .unwrap();
        assert_eq!(coder.format, DateTimeFormat::YyMmDd);

        coder.format = DateTimeFormat::HhMm;
        coder
            .set_configuration(&CoderConfiguration::new().with("format", 42))
            .unwrap();
        assert_eq!(coder.generate_code(), "240305");
    }

    #[test]
    fn test_boolean_format_is_skipped() {
        let mut coder = coder_at(DateTimeFormat::HhMm);
        let err = coder
            .set_configuration(&CoderConfiguration::new().with("format", true))
            .unwrap_err();
        assert!(err.is_import());
        assert_eq!(coder.format, DateTimeFormat::HhMm);
    }

    #[test]
    fn test_label_parsing_is_lenient() {
        assert_eq!(
            "Full Date/Time".parse::<DateTimeFormat>(),
            Ok(DateTimeFormat::FullDateTime)
        );
        assert_eq!("julian date".parse::<DateTimeFormat>(), Ok(DateTimeFormat::JulianDate));
        assert!("weekday".parse::<DateTimeFormat>().is_err());
    }
}
