// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Speech synthesis trait for reading text aloud.

use async_trait::async_trait;

use crate::error::WikooError;
use crate::traits::adapter::PluginAdapter;
use crate::types::Voice;

/// One utterance to be spoken.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    /// Requested locale, e.g. `ta-IN`.
    pub locale: String,
    /// `None` means the platform default voice.
    pub voice: Option<Voice>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// A host text-to-speech engine.
///
/// `speak` starts playback and returns without waiting for it to finish.
/// At most one utterance plays at a time; `cancel` stops whatever is playing.
#[async_trait]
pub trait SpeechSynthesizer: PluginAdapter {
    /// Whether speech is possible on this host at all.
    fn is_available(&self) -> bool;

    /// Stop the current utterance, if any.
    fn cancel(&self);

    /// Begin speaking `request`.
    async fn speak(&self, request: SpeechRequest) -> Result<(), WikooError>;
}
