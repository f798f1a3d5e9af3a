// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Asynchronously populated voice list.

use std::sync::Arc;

use tokio::sync::watch;
use wikoo_core::Voice;

/// Shared, observable list of available voices.
///
/// Starts empty. Whoever discovers the platform's voices calls
/// [`publish`](Self::publish); waiters in [`ready`](Self::ready) resolve on
/// the first non-empty list.
#[derive(Clone)]
pub struct VoiceCatalog {
    tx: Arc<watch::Sender<Vec<Voice>>>,
}

impl VoiceCatalog {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx: Arc::new(tx) }
    }

    /// A catalog that is already loaded.
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        let catalog = Self::new();
        catalog.publish(voices);
        catalog
    }

    /// Replace the voice list and wake any waiters.
    pub fn publish(&self, voices: Vec<Voice>) {
        tracing::debug!(count = voices.len(), "voice catalog published");
        self.tx.send_replace(voices);
    }

    /// Current snapshot; empty until loaded.
    pub fn voices(&self) -> Vec<Voice> {
        self.tx.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        !self.tx.borrow().is_empty()
    }

    /// Wait until the list is non-empty and return it.
    pub async fn ready(&self) -> Vec<Voice> {
        let mut rx = self.tx.subscribe();
        match rx.wait_for(|voices| !voices.is_empty()).await {
            Ok(voices) => voices.clone(),
            // unreachable while `self` holds the sender
            Err(_) => Vec::new(),
        }
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
