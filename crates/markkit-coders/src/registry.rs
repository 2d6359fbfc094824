//! # Coder Registry
//!
//! Ordered catalogue of the coder types a host can offer, e.g. in a
//! dropdown. Each entry pairs a unique display name with a factory, so the
//! host never switches over type names itself. Insertion order is display
//! order.

use crate::coders::{Coder, CoderType, DateTimeCoder, RandomNumberCoder, VinCoder};
use crate::source::{seeded_rng, SharedClock};
use markkit_core::RegistryError;
use std::fmt;

type CoderFactory = Box<dyn Fn() -> Coder + Send + Sync>;

/// A registered coder type
pub struct CoderEntry {
    name: String,
    coder_type: CoderType,
    factory: CoderFactory,
}

impl CoderEntry {
    /// Display name and lookup key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of coder the factory produces
    pub fn coder_type(&self) -> CoderType {
        self.coder_type
    }

    /// Build a fresh coder
    pub fn create(&self) -> Coder {
        (self.factory)()
    }
}

impl fmt::Debug for CoderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoderEntry")
            .field("name", &self.name)
            .field("coder_type", &self.coder_type)
            .finish()
    }
}

/// Ordered collection of available coder types
#[derive(Debug, Default)]
pub struct CoderRegistry {
    entries: Vec<CoderEntry>,
}

impl CoderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in coder type, in display order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for coder_type in CoderType::ALL {
            registry
                .entries
                .push(Self::entry(coder_type, move || coder_type.create()));
        }
        registry
    }

    /// Built-in coders driven by a fixed clock and seeded generators.
    ///
    /// Every coder created from the same registry starts from the same seed,
    /// so repeated runs produce identical output.
    pub fn deterministic(clock: SharedClock, seed: u64) -> Self {
        let mut registry = Self::with_defaults();
        registry.replace(CoderType::DateTime, move || {
            DateTimeCoder::with_clock(clock.clone()).into()
        });
        registry.replace(CoderType::RandomNumber, move || {
            RandomNumberCoder::with_rng(seeded_rng(seed)).into()
        });
        registry.replace(CoderType::Vin, move || {
            VinCoder::with_rng(seeded_rng(seed)).into()
        });
        registry
    }

    fn entry<F>(coder_type: CoderType, factory: F) -> CoderEntry
    where
        F: Fn() -> Coder + Send + Sync + 'static,
    {
        CoderEntry {
            name: coder_type.name().to_string(),
            coder_type,
            factory: Box::new(factory),
        }
    }

    fn replace<F>(&mut self, coder_type: CoderType, factory: F)
    where
        F: Fn() -> Coder + Send + Sync + 'static,
    {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.coder_type == coder_type) {
            entry.factory = Box::new(factory);
        }
    }

    /// Register a coder type under `name`.
    ///
    /// Names must be unique; the entry is appended at the end of the
    /// display order.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        coder_type: CoderType,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Coder + Send + Sync + 'static,
    {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(RegistryError::DuplicateType(name));
        }
        tracing::debug!("Registered coder type {} ({})", name, coder_type.id());
        self.entries.push(CoderEntry {
            name,
            coder_type,
            factory: Box::new(factory),
        });
        Ok(())
    }

    /// Names of all registered coder types in display order
    pub fn list_available_coder_types(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Look up an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&CoderEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Create a coder by type name
    pub fn create_coder(&self, name: &str) -> Result<Coder, RegistryError> {
        let entry = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType(name.to_string()))?;
        tracing::debug!("Creating {} coder", entry.name);
        Ok(entry.create())
    }

    /// Create a coder of the given kind using its registered factory
    pub fn create_by_type(&self, coder_type: CoderType) -> Result<Coder, RegistryError> {
        self.entries
            .iter()
            .find(|e| e.coder_type == coder_type)
            .map(CoderEntry::create)
            .ok_or_else(|| RegistryError::UnknownType(coder_type.name().to_string()))
    }

    /// Iterate over the entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &CoderEntry> {
        self.entries.iter()
    }

    /// Number of registered coder types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no coder types are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
