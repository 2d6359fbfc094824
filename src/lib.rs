//! # MarkKit
//!
//! Code generators for marking and labelling fields. Each field on a label
//! or part marking is driven by a coder that produces the text printed on
//! the next item:
//! - Date/time stamps in several layouts, including Julian dates
//! - Serial numbers with step, repeat and wraparound control
//! - Random numbers of fixed length or within a range
//! - 17 character VIN-shaped codes
//! - Fixed user text
//!
//! ## Architecture
//!
//! MarkKit is organized as a workspace with multiple crates:
//!
//! 1. **markkit-core** - Errors, configuration value model, shared-ownership aliases
//! 2. **markkit-coders** - Coder strategies, registry, time and random sources
//! 3. **markkit-settings** - Settings surfaces and coder field persistence
//! 4. **markkit** - Facade crate and the batch driver binary

pub use markkit_core::{
    CoderConfiguration, CoderError, ConfigImportError, ConfigValidationError, ConfigValue, Error,
    RegistryError, Result, ValueKind,
};

pub use markkit_coders::{
    Clock, Coder, CoderRegistry, CoderStrategy, CoderType, DateTimeCoder, DateTimeFormat,
    FixedClock, NoCodeCoder, RandomNumberCoder, RandomSource, SerialNumberCoder, SharedCoder,
    SystemClock, VinCoder, VIN_LENGTH,
};

pub use markkit_settings::{
    default_store_path, CoderField, CoderFieldStore, CoderSettingsController, FieldKind,
    FieldSchema, SettingUiModel, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for generated codes
/// - RUST_LOG environment variable support, INFO when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stamp() {
        assert!(!VERSION.is_empty());
        assert!(BUILD_DATE.ends_with("UTC"));
    }
}
