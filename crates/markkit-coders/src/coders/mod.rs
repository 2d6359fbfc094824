//! Concrete coders and the closed set that dispatches over them.

use crate::strategy::CoderStrategy;
use markkit_core::{CoderConfiguration, CoderError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod date_time;
mod no_code;
mod random_number;
mod serial_number;
mod vin;

pub use date_time::{DateTimeCoder, DateTimeFormat};
pub use no_code::NoCodeCoder;
pub use random_number::{RandomNumberCoder, MAX_RANDOM_LENGTH};
pub use serial_number::{SerialNumberCoder, SERIAL_WIDTH};
pub use vin::{VinCoder, VIN_LENGTH, VIN_SERIAL_MAX, VIN_SERIAL_WIDTH};

/// Identifies one of the available coder kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoderType {
    DateTime,
    NoCode,
    RandomNumber,
    SerialNumber,
    Vin,
}

impl CoderType {
    /// All coder types in display order
    pub const ALL: [CoderType; 5] = [
        Self::DateTime,
        Self::NoCode,
        Self::RandomNumber,
        Self::SerialNumber,
        Self::Vin,
    ];

    /// Human-readable name, used as the registry key
    pub fn name(&self) -> &'static str {
        match self {
            Self::DateTime => DateTimeCoder::TYPE_NAME,
            Self::NoCode => NoCodeCoder::TYPE_NAME,
            Self::RandomNumber => RandomNumberCoder::TYPE_NAME,
            Self::SerialNumber => SerialNumberCoder::TYPE_NAME,
            Self::Vin => VinCoder::TYPE_NAME,
        }
    }

    /// Snake-case identifier, as used in stored documents
    pub fn id(&self) -> &'static str {
        match self {
            Self::DateTime => "date_time",
            Self::NoCode => "no_code",
            Self::RandomNumber => "random_number",
            Self::SerialNumber => "serial_number",
            Self::Vin => "vin",
        }
    }

    /// One-line description for tooltips and menus
    pub fn description(&self) -> &'static str {
        match self {
            Self::DateTime => "Current date or time in a selectable format",
            Self::NoCode => "Fixed text entered by the user",
            Self::RandomNumber => "Random number of fixed length or within a range",
            Self::SerialNumber => "Incrementing serial number with repeat and wraparound",
            Self::Vin => "17 character vehicle identification number",
        }
    }

    /// A coder of this type with default settings
    pub fn create(&self) -> Coder {
        match self {
            Self::DateTime => Coder::DateTime(DateTimeCoder::default()),
            Self::NoCode => Coder::NoCode(NoCodeCoder::default()),
            Self::RandomNumber => Coder::RandomNumber(RandomNumberCoder::default()),
            Self::SerialNumber => Coder::SerialNumber(SerialNumberCoder::default()),
            Self::Vin => Coder::Vin(VinCoder::default()),
        }
    }
}

impl fmt::Display for CoderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CoderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s) || t.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown coder type: {}", s))
    }
}

/// Any coder, dispatched by variant
#[derive(Debug, Clone)]
pub enum Coder {
    DateTime(DateTimeCoder),
    NoCode(NoCodeCoder),
    RandomNumber(RandomNumberCoder),
    SerialNumber(SerialNumberCoder),
    Vin(VinCoder),
}

impl Coder {
    /// Which kind of coder this is
    pub fn coder_type(&self) -> CoderType {
        match self {
            Coder::DateTime(_) => CoderType::DateTime,
            Coder::NoCode(_) => CoderType::NoCode,
            Coder::RandomNumber(_) => CoderType::RandomNumber,
            Coder::SerialNumber(_) => CoderType::SerialNumber,
            Coder::Vin(_) => CoderType::Vin,
        }
    }

    fn strategy(&self) -> &dyn CoderStrategy {
        match self {
            Coder::DateTime(c) => c,
            Coder::NoCode(c) => c,
            Coder::RandomNumber(c) => c,
            Coder::SerialNumber(c) => c,
            Coder::Vin(c) => c,
        }
    }

    fn strategy_mut(&mut self) -> &mut dyn CoderStrategy {
        match self {
            Coder::DateTime(c) => c,
            Coder::NoCode(c) => c,
            Coder::RandomNumber(c) => c,
            Coder::SerialNumber(c) => c,
            Coder::Vin(c) => c,
        }
    }
}

impl CoderStrategy for Coder {
    fn type_name(&self) -> &'static str {
        self.strategy().type_name()
    }

    fn generate_code(&mut self) -> String {
        self.strategy_mut().generate_code()
    }

    fn preview(&self) -> String {
        self.strategy().preview()
    }

    fn requires_configuration(&self) -> bool {
        self.strategy().requires_configuration()
    }

    fn configuration(&self) -> CoderConfiguration {
        self.strategy().configuration()
    }

    fn set_configuration(&mut self, config: &CoderConfiguration) -> Result<(), CoderError> {
        self.strategy_mut().set_configuration(config)
    }

    fn reset(&mut self) {
        self.strategy_mut().reset()
    }
}

impl From<DateTimeCoder> for Coder {
    fn from(c: DateTimeCoder) -> Self {
        Coder::DateTime(c)
    }
}

impl From<NoCodeCoder> for Coder {
    fn from(c: NoCodeCoder) -> Self {
        Coder::NoCode(c)
    }
}

impl From<RandomNumberCoder> for Coder {
    fn from(c: RandomNumberCoder) -> Self {
        Coder::RandomNumber(c)
    }
}

impl From<SerialNumberCoder> for Coder {
    fn from(c: SerialNumberCoder) -> Self {
        Coder::SerialNumber(c)
    }
}

impl From<VinCoder> for Coder {
    fn from(c: VinCoder) -> Self {
        Coder::Vin(c)
    }
}
