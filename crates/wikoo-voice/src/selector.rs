// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locale-aware voice selection and exclusive playback.
//!
//! Speech is a single shared resource: every request cancels whatever is
//! playing and any deferred request still waiting on the catalog. The last
//! request wins.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use wikoo_config::model::VoiceConfig;
use wikoo_core::{SpeechRequest, SpeechSynthesizer, Voice, WikooError};

use crate::catalog::VoiceCatalog;

/// Prosody applied to every utterance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.1,
            volume: 1.0,
        }
    }
}

impl From<&VoiceConfig> for VoiceSettings {
    fn from(config: &VoiceConfig) -> Self {
        Self {
            rate: config.rate,
            pitch: config.pitch,
            volume: config.volume,
        }
    }
}

/// What happened to a speak request.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeakOutcome {
    /// Playback started. `None` means the platform default voice.
    Started { voice: Option<Voice> },
    /// The catalog was empty; playback will start once it loads.
    Deferred,
}

/// Pick the best voice for `locale`.
///
/// Exact locale match first (ASCII case-insensitive), then any voice sharing
/// the two-character base language, otherwise `None` for the platform default.
pub fn select_voice(voices: &[Voice], locale: &str) -> Option<Voice> {
    if let Some(v) = voices
        .iter()
        .find(|v| v.locale.eq_ignore_ascii_case(locale))
    {
        return Some(v.clone());
    }
    let base = locale.get(..2)?;
    voices
        .iter()
        .find(|v| {
            v.locale
                .get(..2)
                .is_some_and(|b| b.eq_ignore_ascii_case(base))
        })
        .cloned()
}

/// Speaks text in the voice that best fits a locale.
pub struct VoiceSelector {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    catalog: VoiceCatalog,
    settings: VoiceSettings,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl VoiceSelector {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        catalog: VoiceCatalog,
        settings: VoiceSettings,
    ) -> Self {
        Self {
            synthesizer,
            catalog,
            settings,
            pending: Mutex::new(None),
        }
    }

    pub fn is_available(&self) -> bool {
        self.synthesizer.is_available()
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    /// Speak `text` in the best voice for `locale`.
    ///
    /// Cancels the current utterance first. If no voices are known yet the
    /// selection and playback happen once, when the catalog first fills.
    pub async fn speak(&self, text: &str, locale: &str) -> Result<SpeakOutcome, WikooError> {
        if !self.synthesizer.is_available() {
            return Err(WikooError::CapabilityUnsupported(
                "speech synthesis is not available on this host".into(),
            ));
        }

        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
            debug!("superseded deferred speech request");
        }
        self.synthesizer.cancel();

        let voices = self.catalog.voices();
        if !voices.is_empty() {
            let voice = select_voice(&voices, locale);
            debug!(locale, voice = ?voice.as_ref().map(|v| &v.id), "speaking");
            self.synthesizer
                .speak(self.request(text, locale, voice.clone()))
                .await?;
            return Ok(SpeakOutcome::Started { voice });
        }

        debug!(locale, "voice catalog empty, deferring speech");
        let synthesizer = Arc::clone(&self.synthesizer);
        let catalog = self.catalog.clone();
        let mut request = self.request(text, locale, None);
        *pending = Some(tokio::spawn(async move {
            let voices = catalog.ready().await;
            request.voice = select_voice(&voices, &request.locale);
            if let Err(e) = synthesizer.speak(request).await {
                warn!(error = %e, "deferred speech failed");
            }
        }));
        Ok(SpeakOutcome::Deferred)
    }

    /// Stop playback and drop any deferred request.
    pub async fn cancel(&self) {
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
        }
        self.synthesizer.cancel();
    }

    /// Wait for a deferred request, if any, to run.
    pub async fn settle(&self) {
        let handle = self.pending.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    fn request(&self, text: &str, locale: &str, voice: Option<Voice>) -> SpeechRequest {
        SpeechRequest {
            text: text.to_string(),
            locale: locale.to_string(),
            voice,
            rate: self.settings.rate,
            pitch: self.settings.pitch,
            volume: self.settings.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikoo_test_utils::RecordingSynthesizer;

    fn voice(id: &str, locale: &str) -> Voice {
        Voice {
            id: id.to_string(),
            name: id.to_string(),
            locale: locale.to_string(),
        }
    }

    fn voices() -> Vec<Voice> {
        vec![
            voice("en-gb", "en-GB"),
            voice("en-us", "en-US"),
            voice("hindi", "hi"),
        ]
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(select_voice(&voices(), "en-US").unwrap().id, "en-us");
        assert_eq!(select_voice(&voices(), "en-us").unwrap().id, "en-us");
    }

    #[test]
    fn base_language_fallback() {
        assert_eq!(select_voice(&voices(), "hi-IN").unwrap().id, "hindi");
        assert_eq!(select_voice(&voices(), "en-AU").unwrap().id, "en-gb");
    }

    #[test]
    fn no_match_means_platform_default() {
        assert_eq!(select_voice(&voices(), "ta-IN"), None);
        assert_eq!(select_voice(&[], "en-US"), None);
        assert_eq!(select_voice(&voices(), "e"), None);
    }

    #[test]
    fn settings_follow_config() {
        let config = VoiceConfig::default();
        assert_eq!(VoiceSettings::from(&config), VoiceSettings::default());
    }

    fn selector(
        synth: &Arc<RecordingSynthesizer>,
        catalog: VoiceCatalog,
    ) -> VoiceSelector {
        VoiceSelector::new(synth.clone(), catalog, VoiceSettings::default())
    }

    #[tokio::test]
    async fn speaks_immediately_when_catalog_loaded() {
        let synth = Arc::new(RecordingSynthesizer::new());
        let sel = selector(&synth, VoiceCatalog::with_voices(voices()));

        let outcome = sel.speak("hello", "en-US").await.unwrap();
        assert_eq!(
            outcome,
            SpeakOutcome::Started {
                voice: Some(voice("en-us", "en-US"))
            }
        );
        let spoken = synth.spoken();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "hello");
        assert_eq!(spoken[0].rate, 0.9);
        assert_eq!(spoken[0].pitch, 1.1);
    }

    #[tokio::test]
    async fn every_request_cancels_current_playback() {
        let synth = Arc::new(RecordingSynthesizer::new());
        let sel = selector(&synth, VoiceCatalog::with_voices(voices()));

        sel.speak("one", "en-US").await.unwrap();
        sel.speak("two", "en-US").await.unwrap();
        assert_eq!(synth.cancel_count(), 2);
        assert_eq!(synth.spoken().len(), 2);
    }

    #[tokio::test]
    async fn deferred_until_catalog_loads_then_speaks_once() {
        let synth = Arc::new(RecordingSynthesizer::new());
        let catalog = VoiceCatalog::new();
        let sel = selector(&synth, catalog.clone());

        let outcome = sel.speak("नमस्ते", "hi-IN").await.unwrap();
        assert_eq!(outcome, SpeakOutcome::Deferred);
        assert!(synth.spoken().is_empty());

        catalog.publish(voices());
        sel.settle().await;
        catalog.publish(voices());
        sel.settle().await;

        let spoken = synth.spoken();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].voice, Some(voice("hindi", "hi")));
    }

    #[tokio::test]
    async fn newer_request_supersedes_deferred_one() {
        let synth = Arc::new(RecordingSynthesizer::new());
        let catalog = VoiceCatalog::new();
        let sel = selector(&synth, catalog.clone());

        sel.speak("first", "en-US").await.unwrap();
        sel.speak("second", "en-US").await.unwrap();
        catalog.publish(voices());
        sel.settle().await;

        let spoken = synth.spoken();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "second");
    }

    #[tokio::test]
    async fn cancel_drops_deferred_request() {
        let synth = Arc::new(RecordingSynthesizer::new());
        let catalog = VoiceCatalog::new();
        let sel = selector(&synth, catalog.clone());

        sel.speak("later", "en-US").await.unwrap();
        sel.cancel().await;
        catalog.publish(voices());
        sel.settle().await;
        assert!(synth.spoken().is_empty());
    }

    #[tokio::test]
    async fn unavailable_synthesizer_is_reported() {
        let synth = Arc::new(RecordingSynthesizer::unavailable());
        let sel = selector(&synth, VoiceCatalog::with_voices(voices()));
        assert!(!sel.is_available());
        assert!(matches!(
            sel.speak("hi", "en-US").await,
            Err(WikooError::CapabilityUnsupported(_))
        ));
    }
}
