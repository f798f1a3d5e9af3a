// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value persistence trait for device-local state.

use async_trait::async_trait;

use crate::error::WikooError;
use crate::traits::adapter::PluginAdapter;

/// Durable string-keyed storage on the local device.
///
/// Values are opaque strings; typed wrappers (conversation log, profile)
/// serialize on top. A missing key is `Ok(None)`, never an error.
#[async_trait]
pub trait KeyValueStore: PluginAdapter {
    /// Prepares the backend (migrations, connection). Idempotent.
    async fn initialize(&self) -> Result<(), WikooError> {
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>, WikooError>;

    /// Stores `value`, replacing any prior value for `key`.
    async fn save(&self, key: &str, value: &str) -> Result<(), WikooError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), WikooError>;

    /// Removes every key.
    async fn clear(&self) -> Result<(), WikooError>;
}
