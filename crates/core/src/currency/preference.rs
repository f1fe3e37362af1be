//! Persisted currency preference.
//!
//! The preference lives in a generic key/value settings store as the record
//! `{ id: "currency", value: { code: "<CODE>" } }`. The store behind it is a
//! port so the core stays free of database dependencies.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use fransuite_shared::types::CurrencyCode;

/// Settings key under which the currency preference is stored.
pub const CURRENCY_PREFERENCE_KEY: &str = "currency";

/// Failure reading or writing a stored preference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// The backing store could not be reached or rejected the operation.
    #[error("Preference storage error: {0}")]
    Storage(String),

    /// The stored value does not have the expected shape.
    #[error("Malformed preference value: {0}")]
    Malformed(String),
}

/// Key/value store holding user preferences.
///
/// Reads are point lookups by key; writes replace the whole value for a key.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Returns the stored value for `key`, or `None` when no record exists.
    async fn find(&self, key: &str) -> Result<Option<Value>, PreferenceError>;

    /// Inserts or replaces the value stored under `key`.
    async fn upsert(&self, key: &str, value: Value) -> Result<(), PreferenceError>;
}

/// Stored shape of the currency preference.
///
/// `code` is kept as text so unknown codes written by other clients can be
/// read back and reported instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPreference {
    /// Currency code as stored.
    pub code: String,
}

impl CurrencyPreference {
    /// Builds the record for a known currency.
    #[must_use]
    pub fn new(code: CurrencyCode) -> Self {
        Self {
            code: code.as_str().to_string(),
        }
    }

    /// Decodes a stored value.
    pub fn from_value(value: Value) -> Result<Self, PreferenceError> {
        serde_json::from_value(value).map_err(|e| PreferenceError::Malformed(e.to_string()))
    }

    /// Encodes the record for storage.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({ "code": self.code })
    }
}

/// Process-local preference store.
///
/// Used by tests and by deployments without a database. Reads and writes
/// can be switched to fail to simulate an unreachable backend.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceRepository {
    entries: DashMap<String, Value>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryPreferenceRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with one record.
    #[must_use]
    pub fn with_entry(key: &str, value: Value) -> Self {
        let repo = Self::new();
        repo.entries.insert(key.to_string(), value);
        repo
    }

    /// Makes subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Returns the stored value for `key` without going through the port.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn find(&self, key: &str) -> Result<Option<Value>, PreferenceError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(PreferenceError::Storage("preference store unavailable".into()));
        }
        Ok(self.get(key))
    }

    async fn upsert(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(PreferenceError::Storage("preference store unavailable".into()));
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
