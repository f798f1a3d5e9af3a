// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The chat flow: user turns in, companion replies out, everything persisted.

use std::sync::Arc;

use tracing::{debug, warn};

use wikoo_core::{
    ChatRequest, CompanionService, ConversationLog, Language, Phrase, Utterance, WikooError,
};
use wikoo_storage::ConversationStore;
use wikoo_voice::{SpeakOutcome, VoiceSelector};

/// One conversation with the companion.
pub struct ChatSession {
    conversations: ConversationStore,
    companion: Arc<dyn CompanionService>,
    voice: Option<Arc<VoiceSelector>>,
    language: Language,
    auto_play: bool,
}

impl ChatSession {
    pub fn new(
        conversations: ConversationStore,
        companion: Arc<dyn CompanionService>,
        language: Language,
    ) -> Self {
        Self {
            conversations,
            companion,
            voice: None,
            language,
            auto_play: false,
        }
    }

    pub fn with_voice(mut self, voice: Arc<VoiceSelector>, auto_play: bool) -> Self {
        self.voice = Some(voice);
        self.auto_play = auto_play;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Load the log, seeding an empty one with the welcome message.
    pub async fn open(&self) -> Result<ConversationLog, WikooError> {
        let log = self.conversations.load().await?;
        if !log.is_empty() {
            return Ok(log);
        }
        debug!(lang = self.language.code(), "new conversation");
        self.conversations
            .append(Utterance::bot(self.language.phrase(Phrase::Welcome)))
            .await
    }

    pub async fn history(&self) -> Result<ConversationLog, WikooError> {
        self.conversations.load().await
    }

    /// Send one user message and return the bot's answer.
    ///
    /// Blank input is ignored and returns `None`. Service failures become
    /// localized bot text; only storage errors are returned.
    pub async fn send(&self, text: &str) -> Result<Option<Utterance>, WikooError> {
        let message = text.trim();
        if message.is_empty() {
            return Ok(None);
        }
        self.conversations.append(Utterance::user(message)).await?;

        let request = ChatRequest {
            message: message.to_string(),
            lang: self.language.code().to_string(),
        };
        let reply = match self.companion.chat_reply(&request).await {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => {
                debug!("chat service returned an empty reply");
                self.language.phrase(Phrase::ChatFallback).to_string()
            }
            Err(e) => {
                warn!(error = %e, "chat service failed");
                self.language.phrase(Phrase::ConnectionError).to_string()
            }
        };

        let bot = Utterance::bot(reply);
        self.conversations.append(bot.clone()).await?;
        if self.auto_play {
            self.speak_text(&bot.text).await;
        }
        Ok(Some(bot))
    }

    /// Speak the bot utterance at `index` in the log.
    pub async fn speak(&self, index: usize) -> Result<SpeakOutcome, WikooError> {
        let Some(voice) = &self.voice else {
            return Err(WikooError::CapabilityUnsupported(
                "no speech output configured".into(),
            ));
        };
        let log = self.conversations.load().await?;
        match log.get(index) {
            Some(u) if !u.is_user() => voice.speak(&u.text, self.language.locale_tag()).await,
            Some(_) => Err(WikooError::Validation(format!(
                "entry {index} is a user message"
            ))),
            None => Err(WikooError::Validation(format!(
                "no message at position {index}"
            ))),
        }
    }

    async fn speak_text(&self, text: &str) {
        let Some(voice) = &self.voice else {
            return;
        };
        match voice.speak(text, self.language.locale_tag()).await {
            Ok(_) => {}
            Err(WikooError::CapabilityUnsupported(reason)) => {
                debug!(reason, "speech unavailable, reply not spoken");
            }
            Err(e) => warn!(error = %e, "reply playback failed"),
        }
    }
}
