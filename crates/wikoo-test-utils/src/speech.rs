// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Speech engine double.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;
use wikoo_core::{
    AdapterType, HealthStatus, PluginAdapter, SpeechRequest, SpeechSynthesizer, WikooError,
};

/// A [`SpeechSynthesizer`] that records requests instead of playing audio.
pub struct RecordingSynthesizer {
    available: AtomicBool,
    spoken: Mutex<Vec<SpeechRequest>>,
    cancels: AtomicUsize,
    spoke: Notify,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            spoken: Mutex::new(Vec::new()),
            cancels: AtomicUsize::new(0),
            spoke: Notify::new(),
        }
    }

    /// A synthesizer that reports speech as unsupported on this host.
    pub fn unavailable() -> Self {
        let s = Self::new();
        s.available.store(false, Ordering::SeqCst);
        s
    }

    pub fn spoken(&self) -> Vec<SpeechRequest> {
        lock(&self.spoken).clone()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }

    /// Wait until at least `n` utterances have been recorded.
    pub async fn wait_for_utterances(&self, n: usize) {
        loop {
            let notified = self.spoke.notified();
            if lock(&self.spoken).len() >= n {
                return;
            }
            notified.await;
        }
    }
}

impl Default for RecordingSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl PluginAdapter for RecordingSynthesizer {
    fn name(&self) -> &str {
        "recording-synthesizer"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Speech
    }

    async fn health_check(&self) -> Result<HealthStatus, WikooError> {
        if self.is_available() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy("speech unavailable".into()))
        }
    }

    async fn shutdown(&self) -> Result<(), WikooError> {
        Ok(())
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }

    async fn speak(&self, request: SpeechRequest) -> Result<(), WikooError> {
        if !self.is_available() {
            return Err(WikooError::CapabilityUnsupported("speech synthesis".into()));
        }
        lock(&self.spoken).push(request);
        self.spoke.notify_waiters();
        Ok(())
    }
}
