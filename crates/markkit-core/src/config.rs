//! Coder configuration model
//!
//! A coder's configuration is a flat map from string keys to typed values.
//! The map is the only contract between a coder and its host: the host
//! renders it, edits it and stores it, the coder exports and imports it.
//!
//! Import is partial: keys that are absent leave the current value alone,
//! unknown keys are ignored, and keys with the wrong value type are skipped
//! and reported through [`ConfigImportError`].

use crate::error::{ConfigImportError, SkippedKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The kind of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Signed integer
    Integer,
    /// Boolean flag
    Boolean,
    /// Free text
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Boolean => write!(f, "boolean"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean flag
    Boolean(bool),
    /// Signed integer
    Integer(i64),
    /// Free text
    Text(String),
}

impl ConfigValue {
    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Integer payload, if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Text payload, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        Self::Integer(v as i64)
    }
}

impl From<u32> for ConfigValue {
    fn from(v: u32) -> Self {
        Self::Integer(v as i64)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Key-value configuration of a single coder
///
/// Keys are kept in sorted order so that exported configurations serialize
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoderConfiguration {
    values: BTreeMap<String, ConfigValue>,
}

impl CoderConfiguration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a value, returning it if present
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.values.remove(key)
    }

    /// Look up a value
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Look up an integer value, ignoring values of other kinds
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_int)
    }

    /// Look up a boolean value, ignoring values of other kinds
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    /// Look up a text value, ignoring values of other kinds
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_text)
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the configuration has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over the entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every entry of `other` into this configuration; `other` wins on
    /// conflicting keys
    pub fn merge(&mut self, other: &CoderConfiguration) {
        for (key, value) in other.iter() {
            self.values.insert(key.to_string(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for CoderConfiguration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (k, v) in iter {
            config.insert(k, v);
        }
        config
    }
}

/// Typed, lenient reader over an imported configuration
///
/// Each accessor returns `Some` only when the key is present with the
/// expected kind. Present keys with a different kind are recorded and
/// reported together by [`ConfigReader::finish`].
#[derive(Debug)]
pub struct ConfigReader<'a> {
    config: &'a CoderConfiguration,
    skipped: Vec<SkippedKey>,
}

impl<'a> ConfigReader<'a> {
    /// Start reading a configuration
    pub fn new(config: &'a CoderConfiguration) -> Self {
        Self {
            config,
            skipped: Vec::new(),
        }
    }

    fn read<T>(
        &mut self,
        key: &str,
        expected: ValueKind,
        extract: impl FnOnce(&'a ConfigValue) -> Option<T>,
    ) -> Option<T> {
        let value = self.config.get(key)?;
        match extract(value) {
            Some(v) => Some(v),
            None => {
                tracing::warn!(
                    "Skipping configuration key '{}': expected {}, found {}",
                    key,
                    expected,
                    value.kind()
                );
                self.skipped.push(SkippedKey {
                    key: key.to_string(),
                    expected,
                    found: value.kind(),
                });
                None
            }
        }
    }

    /// Read an integer key
    pub fn int(&mut self, key: &str) -> Option<i64> {
        self.read(key, ValueKind::Integer, ConfigValue::as_int)
    }

    /// Read a boolean key
    pub fn bool(&mut self, key: &str) -> Option<bool> {
        self.read(key, ValueKind::Boolean, ConfigValue::as_bool)
    }

    /// Read a text key
    pub fn text(&mut self, key: &str) -> Option<&'a str> {
        self.read(key, ValueKind::Text, ConfigValue::as_text)
    }

    /// Raw access for keys that accept more than one kind
    pub fn raw(&self, key: &str) -> Option<&'a ConfigValue> {
        self.config.get(key)
    }

    /// Record a key as skipped without reading it through a typed accessor
    pub fn skip(&mut self, key: &str, expected: ValueKind) {
        if let Some(value) = self.config.get(key) {
            self.skipped.push(SkippedKey {
                key: key.to_string(),
                expected,
                found: value.kind(),
            });
        }
    }

    /// Finish reading; report every skipped key at once
    pub fn finish(self) -> Result<(), ConfigImportError> {
        if self.skipped.is_empty() {
            Ok(())
        } else {
            Err(ConfigImportError {
                skipped: self.skipped,
            })
        }
    }
}
