// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring shared by every subcommand: storage, companion, and speech.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use wikoo_companion::HttpCompanion;
use wikoo_config::model::WikooConfig;
use wikoo_core::{KeyValueStore, Language, PluginAdapter, WikooError};
use wikoo_report::{ChatSession, ReportOrchestrator};
use wikoo_storage::{ConversationStore, ProfileStore, SqliteStore};
use wikoo_voice::{CommandSynthesizer, VoiceCatalog, VoiceSelector, VoiceSettings};

/// Speech output, present when enabled in config.
pub struct Speech {
    pub synthesizer: Arc<CommandSynthesizer>,
    pub selector: Arc<VoiceSelector>,
    catalog_load: Option<JoinHandle<()>>,
}

impl Speech {
    fn start(config: &WikooConfig) -> Self {
        let synthesizer = Arc::new(CommandSynthesizer::new(config.voice.command.clone()));
        let catalog = VoiceCatalog::new();
        let catalog_load = synthesizer.load_catalog(catalog.clone());
        let selector = Arc::new(VoiceSelector::new(
            synthesizer.clone(),
            catalog,
            VoiceSettings::from(&config.voice),
        ));
        Self {
            synthesizer,
            selector,
            catalog_load,
        }
    }

    /// Let queued and playing speech finish.
    ///
    /// A request deferred on a catalog that never loaded is dropped.
    pub async fn finish(&mut self) {
        if let Some(handle) = self.catalog_load.take() {
            let _ = handle.await;
        }
        if self.selector.catalog().is_loaded() {
            self.selector.settle().await;
        } else {
            self.selector.cancel().await;
        }
        self.synthesizer.wait().await;
    }
}

pub struct App {
    pub config: WikooConfig,
    pub store: Arc<SqliteStore>,
    pub conversations: ConversationStore,
    pub profile: ProfileStore,
    pub companion: Arc<HttpCompanion>,
    pub speech: Option<Speech>,
}

impl App {
    pub async fn open(config: WikooConfig) -> Result<Self, WikooError> {
        let store = Arc::new(SqliteStore::new(config.storage.clone()));
        store.initialize().await?;
        debug!(path = %config.storage.database_path, "store opened");

        let conversations = ConversationStore::new(store.clone());
        let profile = ProfileStore::new(store.clone(), config.app.language());
        let companion = Arc::new(HttpCompanion::new(&config.companion)?);
        let speech = config.voice.enabled.then(|| Speech::start(&config));

        Ok(Self {
            config,
            store,
            conversations,
            profile,
            companion,
            speech,
        })
    }

    pub async fn language(&self) -> Result<Language, WikooError> {
        self.profile.language().await
    }

    pub async fn chat_session(&self) -> Result<ChatSession, WikooError> {
        let session = ChatSession::new(
            self.conversations.clone(),
            self.companion.clone(),
            self.language().await?,
        );
        Ok(match &self.speech {
            Some(speech) => {
                session.with_voice(speech.selector.clone(), self.config.voice.auto_play_replies)
            }
            None => session,
        })
    }

    pub async fn orchestrator(&self, speak: bool) -> Result<ReportOrchestrator, WikooError> {
        let orch = ReportOrchestrator::new(
            self.conversations.clone(),
            self.companion.clone(),
            self.language().await?,
        );
        Ok(match &self.speech {
            Some(speech) => orch.with_voice(speech.selector.clone(), speak),
            None => orch,
        })
    }

    pub async fn close(mut self) {
        if let Some(speech) = self.speech.as_mut() {
            speech.finish().await;
        }
        if let Err(e) = self.store.shutdown().await {
            warn!(error = %e, "store shutdown failed");
        }
    }
}
