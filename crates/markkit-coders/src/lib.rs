//! # MarkKit Coders
//!
//! Code generators for marking fields. A coder produces the text printed on
//! each physical item: a date stamp, a serial number, a random number, a
//! fixed string or a vehicle identification number.
//!
//! ## Core Components
//!
//! - **Strategy**: the [`CoderStrategy`] contract (generate, preview,
//!   configuration export/import, reset)
//! - **Coders**: [`DateTimeCoder`], [`NoCodeCoder`], [`RandomNumberCoder`],
//!   [`SerialNumberCoder`], [`VinCoder`], and the closed [`Coder`] set
//! - **Registry**: [`CoderRegistry`], the named, ordered catalogue a host
//!   presents to the user
//! - **Sources**: injected [`Clock`] and [`RandomSource`] so output can be
//!   pinned in tests
//! - **Sharing**: [`SharedCoder`] for sequences drawn from several threads
//!
//! ## Usage
//!
//! ```rust,ignore
//! use markkit_coders::{CoderRegistry, CoderStrategy};
//! use markkit_core::CoderConfiguration;
//!
//! let registry = CoderRegistry::with_defaults();
//! let mut serial = registry.create_coder("Serial Number")?;
//! serial.set_configuration(&CoderConfiguration::new().with("startValue", 1000))?;
//!
//! for _ in 0..3 {
//!     println!("{}", serial.generate_code());
//! }
//!
//! // Persist counters with the document
//! let saved = serial.configuration();
//! ```

pub mod coders;
pub mod format;
pub mod registry;
pub mod shared;
pub mod source;
pub mod strategy;

pub use coders::{
    Coder, CoderType, DateTimeCoder, DateTimeFormat, NoCodeCoder, RandomNumberCoder,
    SerialNumberCoder, VinCoder, VIN_LENGTH,
};
pub use registry::{CoderEntry, CoderRegistry};
pub use shared::SharedCoder;
pub use source::{
    default_rng, seeded_rng, system_clock, Clock, FixedClock, RandomSource, SharedClock,
    SystemClock,
};
pub use strategy::CoderStrategy;
