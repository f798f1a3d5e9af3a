// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory key/value store.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use wikoo_core::{AdapterType, HealthStatus, KeyValueStore, PluginAdapter, WikooError};

/// A [`KeyValueStore`] backed by a map.
///
/// `fail_next` makes the next operation return a storage error, for
/// exercising propagation paths.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
    failure: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store operation fail with `message`.
    pub fn fail_next(&self, message: &str) {
        *lock(&self.failure) = Some(message.to_string());
    }

    /// Snapshot of every stored key, sorted.
    pub fn keys(&self) -> Vec<String> {
        lock(&self.values).keys().cloned().collect()
    }

    fn check(&self) -> Result<(), WikooError> {
        match lock(&self.failure).take() {
            Some(message) => Err(WikooError::Storage {
                source: message.into(),
            }),
            None => Ok(()),
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl PluginAdapter for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Store
    }

    async fn health_check(&self) -> Result<HealthStatus, WikooError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), WikooError> {
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>, WikooError> {
        self.check()?;
        Ok(lock(&self.values).get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), WikooError> {
        self.check()?;
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), WikooError> {
        self.check()?;
        lock(&self.values).remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), WikooError> {
        self.check()?;
        lock(&self.values).clear();
        Ok(())
    }
}
