//! Two-tier JSON lookup over string key/value stores.
//!
//! A [`TieredStore`] asks a primary (session-scoped) store first and a
//! secondary (persistent) store second. For a single tier the result is a
//! [`Lookup`]; across tiers everything that is not a decoded value collapses
//! to `None`. Nothing in this module returns an error to the caller.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::DEFAULT_STORAGE_NAMESPACE;
use crate::error::StoreResult;

/// A string-keyed store with a single read operation.
pub trait KeyValueStore {
    /// Read the raw string stored under `key`.
    ///
    /// `Ok(None)` means the key is missing; `Err` means the store itself could
    /// not be consulted.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    /// Builder form of [`set_item`](Self::set_item).
    #[must_use]
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_item(key, value);
        self
    }

    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }
}

/// Result of reading one tier.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The stored text decoded as JSON.
    Value(Value),
    /// Store unavailable or key missing.
    Absent,
    /// The stored text is not valid JSON.
    Malformed,
}

impl Lookup {
    /// Collapse to the decoded value, discarding the reason for a miss.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Malformed => None,
        }
    }

    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// Primary/secondary store pair sharing a key namespace.
#[derive(Debug, Clone)]
pub struct TieredStore<P, S> {
    primary: P,
    secondary: S,
    namespace: String,
}

impl<P: KeyValueStore, S: KeyValueStore> TieredStore<P, S> {
    /// Compose two stores under the default `__uwu__` namespace.
    #[must_use]
    pub fn new(primary: P, secondary: S) -> Self {
        Self::with_namespace(primary, secondary, DEFAULT_STORAGE_NAMESPACE)
    }

    #[must_use]
    pub fn with_namespace(primary: P, secondary: S, namespace: impl Into<String>) -> Self {
        Self {
            primary,
            secondary,
            namespace: namespace.into(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn primary(&self) -> &P {
        &self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Full storage key for a logical key.
    #[must_use]
    pub fn namespaced_key(&self, key: &str) -> String {
        format!("{}{key}", self.namespace)
    }

    /// Read and decode `key` from the primary store, then the secondary.
    ///
    /// The secondary is only consulted when the primary does not produce a
    /// decoded value.
    #[must_use]
    pub fn read_json(&self, key: &str) -> Option<Value> {
        let full_key = self.namespaced_key(key);
        match lookup(&self.primary, &full_key) {
            Lookup::Value(value) => return Some(value),
            miss => {
                tracing::debug!(
                    message = "theme.storage.primary_miss",
                    key = %full_key,
                    malformed = matches!(miss, Lookup::Malformed),
                );
            }
        }
        let secondary = lookup(&self.secondary, &full_key);
        if !secondary.is_value() {
            tracing::debug!(
                message = "theme.storage.secondary_miss",
                key = %full_key,
                malformed = matches!(secondary, Lookup::Malformed),
            );
        }
        secondary.into_value()
    }
}

/// Read and decode a single (already namespaced) key from one store.
pub fn lookup<K: KeyValueStore + ?Sized>(store: &K, full_key: &str) -> Lookup {
    let raw = match store.get_item(full_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Lookup::Absent,
        Err(err) => {
            tracing::debug!(message = "theme.storage.unavailable", key = full_key, error = %err);
            return Lookup::Absent;
        }
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => Lookup::Value(value),
        Err(_) => Lookup::Malformed,
    }
}
