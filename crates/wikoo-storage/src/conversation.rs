// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The persisted, ordered conversation log.

use std::sync::Arc;

use tracing::warn;
use wikoo_core::{ConversationLog, KeyValueStore, Utterance, WikooError};

use crate::keys;

/// Conversation log for this device.
///
/// The whole log is stored as one JSON array and every mutation rewrites it.
/// There is one logical writer per device; concurrent appends are last-writer-wins.
#[derive(Clone)]
pub struct ConversationStore {
    store: Arc<dyn KeyValueStore>,
}

impl ConversationStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The full ordered log.
    ///
    /// A missing value and a value that fails to deserialize both yield an
    /// empty log; the latter is logged and otherwise ignored.
    pub async fn load(&self) -> Result<ConversationLog, WikooError> {
        let Some(raw) = self.store.load(keys::CHAT_HISTORY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<ConversationLog>(&raw) {
            Ok(log) => Ok(log),
            Err(e) => {
                warn!(error = %e, "stored conversation log is unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Replace the persisted log with `log`.
    pub async fn save(&self, log: &[Utterance]) -> Result<(), WikooError> {
        let raw = serde_json::to_string(log)?;
        self.store.save(keys::CHAT_HISTORY, &raw).await
    }

    /// Add `utterance` to the end of the log and persist the full log.
    ///
    /// Returns the log as persisted.
    pub async fn append(&self, utterance: Utterance) -> Result<ConversationLog, WikooError> {
        let mut log = self.load().await?;
        log.push(utterance);
        self.save(&log).await?;
        Ok(log)
    }

    /// Erase the persisted log.
    pub async fn clear(&self) -> Result<(), WikooError> {
        self.store.remove(keys::CHAT_HISTORY).await
    }
}
