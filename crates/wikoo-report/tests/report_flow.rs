// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end report flow against in-memory doubles and on-disk SQLite.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use wikoo_config::model::StorageConfig;
use wikoo_core::{
    KeyValueStore, Language, MoodScore, MoodTier, Phrase, ReportSource, Utterance, Voice,
};
use wikoo_report::{ChatSession, ReportOrchestrator, ReportState, TextExporter};
use wikoo_storage::{ConversationStore, SqliteStore};
use wikoo_test_utils::{MemoryStore, RecordingSynthesizer, Scripted, ScriptedCompanion};
use wikoo_voice::{VoiceCatalog, VoiceSelector, VoiceSettings};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn voices() -> Vec<Voice> {
    vec![
        Voice {
            id: "en-us".into(),
            name: "English (America)".into(),
            locale: "en-US".into(),
        },
        Voice {
            id: "ta".into(),
            name: "Tamil".into(),
            locale: "ta".into(),
        },
    ]
}

struct Harness {
    conversations: ConversationStore,
    companion: Arc<ScriptedCompanion>,
    synth: Arc<RecordingSynthesizer>,
    catalog: VoiceCatalog,
    voice: Arc<VoiceSelector>,
}

impl Harness {
    fn new(outcomes: Vec<Scripted>, catalog: VoiceCatalog) -> Self {
        let synth = Arc::new(RecordingSynthesizer::new());
        let voice = Arc::new(VoiceSelector::new(
            synth.clone(),
            catalog.clone(),
            VoiceSettings::default(),
        ));
        Self {
            conversations: ConversationStore::new(Arc::new(MemoryStore::new())),
            companion: Arc::new(ScriptedCompanion::with_outcomes(outcomes)),
            synth,
            catalog,
            voice,
        }
    }

    fn orchestrator(&self, lang: Language) -> ReportOrchestrator {
        ReportOrchestrator::new(self.conversations.clone(), self.companion.clone(), lang)
            .with_voice(self.voice.clone(), true)
    }
}

#[tokio::test]
async fn empty_log_skips_the_service() {
    let h = Harness::new(vec![], VoiceCatalog::with_voices(voices()));
    let mut orch = h.orchestrator(Language::English);

    let result = orch.generate_on(date()).await.unwrap().clone();
    assert!(!result.succeeded);
    assert_eq!(result.source, ReportSource::NoConversation);
    assert_eq!(result.text, Phrase::NoConversation.text(Language::English));
    assert_eq!(result.mood_score, None);
    assert_eq!(h.companion.call_count(), 0);
    assert!(h.synth.spoken().is_empty());
    assert!(orch.gauge().is_none());

    let tmp = tempfile::tempdir().unwrap();
    assert!(orch.export(&TextExporter::new(tmp.path())).is_err());
}

#[tokio::test]
async fn bot_only_log_counts_as_empty() {
    let h = Harness::new(vec![], VoiceCatalog::with_voices(voices()));
    h.conversations
        .save(&[Utterance::bot("Hi! I'm Wikoo")])
        .await
        .unwrap();
    let mut orch = h.orchestrator(Language::Tamil);

    let result = orch.generate_on(date()).await.unwrap();
    assert_eq!(result.text, Phrase::NoConversation.text(Language::Tamil));
    assert_eq!(h.companion.call_count(), 0);
}

#[tokio::test]
async fn successful_report_is_scored_spoken_and_exportable() {
    let h = Harness::new(
        vec![Scripted::Reply("You sound well rested.".into())],
        VoiceCatalog::with_voices(voices()),
    );
    h.conversations
        .save(&[
            Utterance::bot("welcome"),
            Utterance::user("I feel happy and calm today"),
        ])
        .await
        .unwrap();
    let mut orch = h.orchestrator(Language::English);

    let result = orch.generate_on(date()).await.unwrap().clone();
    assert!(result.succeeded);
    assert_eq!(result.source, ReportSource::Service);
    assert_eq!(result.mood_score, Some(MoodScore::MAX));

    let gauge = orch.gauge().unwrap();
    assert_eq!(gauge.value, 100.0);
    assert_eq!(gauge.tier, MoodTier::Good);

    let spoken = h.synth.spoken();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0].text, "You sound well rested.");
    assert_eq!(spoken[0].locale, "en-US");
    assert_eq!(spoken[0].voice.as_ref().map(|v| v.id.as_str()), Some("en-us"));

    let tmp = tempfile::tempdir().unwrap();
    let path = orch.export(&TextExporter::new(tmp.path())).unwrap();
    let body = std::fs::read_to_string(path).unwrap();
    assert!(body.contains("Date: 19/10/2026"));
    assert!(body.contains("You sound well rested."));
}

#[tokio::test]
#[tracing_test::traced_test]
async fn service_failure_falls_back_but_stays_usable() {
    let h = Harness::new(
        vec![Scripted::Status(500)],
        VoiceCatalog::with_voices(voices()),
    );
    h.conversations
        .save(&[Utterance::user("I am sad and anxious")])
        .await
        .unwrap();
    let mut orch = h.orchestrator(Language::English);

    let result = orch.generate_on(date()).await.unwrap().clone();
    assert!(result.succeeded);
    assert_eq!(result.source, ReportSource::Fallback);
    assert_eq!(result.text, Phrase::ReportFallback.text(Language::English));
    assert_eq!(result.mood_score, Some(MoodScore::MIN));
    assert!(matches!(orch.state(), ReportState::Ready(_)));
    assert_eq!(h.companion.call_count(), 1);
    assert!(logs_contain("report service failed"));

    // the fallback text is still spoken, replayable and exportable
    assert_eq!(h.synth.spoken().len(), 1);
    orch.replay().await.unwrap();
    assert_eq!(h.synth.spoken().len(), 2);

    let tmp = tempfile::tempdir().unwrap();
    assert!(orch.export(&TextExporter::new(tmp.path())).is_ok());
}

#[tokio::test]
async fn abandoned_generation_returns_to_idle() {
    let h = Harness::new(vec![Scripted::Hang], VoiceCatalog::with_voices(voices()));
    h.conversations
        .save(&[Utterance::user("I feel calm")])
        .await
        .unwrap();
    let mut orch = h.orchestrator(Language::English);

    let waited = tokio::time::timeout(Duration::from_millis(50), orch.generate_on(date())).await;
    assert!(waited.is_err());
    assert_eq!(h.companion.call_count(), 1);

    assert_eq!(orch.state(), &ReportState::Idle);
    assert!(!orch.is_busy());
    assert!(orch.current().is_none());
    assert!(h.synth.spoken().is_empty());

    // a later request goes through normally
    let result = orch.generate_on(date()).await.unwrap();
    assert_eq!(result.text, "mock reply");
}

#[tokio::test]
async fn abandoned_regeneration_keeps_the_previous_report() {
    let h = Harness::new(
        vec![Scripted::Reply("first".into()), Scripted::Hang],
        VoiceCatalog::with_voices(voices()),
    );
    h.conversations
        .save(&[Utterance::user("good day")])
        .await
        .unwrap();
    let mut orch = h.orchestrator(Language::English);
    orch.generate_on(date()).await.unwrap();

    let waited = tokio::time::timeout(Duration::from_millis(50), orch.generate_on(date())).await;
    assert!(waited.is_err());

    assert!(!orch.is_busy());
    assert_eq!(orch.current().map(|r| r.text.as_str()), Some("first"));
    assert!(orch.gauge().is_some());
    assert_eq!(h.synth.spoken().len(), 1);
}

#[tokio::test]
async fn report_waits_for_voices_then_speaks_once() {
    let h = Harness::new(
        vec![Scripted::Reply("நீங்கள் நன்றாக இருக்கிறீர்கள்".into())],
        VoiceCatalog::new(),
    );
    h.conversations
        .save(&[Utterance::user("மகிழ்ச்சி")])
        .await
        .unwrap();
    let mut orch = h.orchestrator(Language::Tamil);

    orch.generate_on(date()).await.unwrap();
    assert!(h.synth.spoken().is_empty());

    h.catalog.publish(voices());
    h.synth.wait_for_utterances(1).await;
    h.catalog.publish(voices());
    h.voice.settle().await;

    let spoken = h.synth.spoken();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0].locale, "ta-IN");
    assert_eq!(spoken[0].voice.as_ref().map(|v| v.id.as_str()), Some("ta"));
}

#[tokio::test]
async fn unavailable_speech_does_not_fail_the_report() {
    let synth = Arc::new(RecordingSynthesizer::unavailable());
    let voice = Arc::new(VoiceSelector::new(
        synth.clone(),
        VoiceCatalog::with_voices(voices()),
        VoiceSettings::default(),
    ));
    let conversations = ConversationStore::new(Arc::new(MemoryStore::new()));
    conversations
        .save(&[Utterance::user("good day")])
        .await
        .unwrap();
    let mut orch = ReportOrchestrator::new(
        conversations,
        Arc::new(ScriptedCompanion::new()),
        Language::English,
    )
    .with_voice(voice, true);

    let result = orch.generate_on(date()).await.unwrap();
    assert_eq!(result.text, "mock reply");
    assert!(synth.spoken().is_empty());
}

#[tokio::test]
async fn chat_then_report_over_sqlite() {
    let tmp = tempfile::tempdir().unwrap();
    let store = Arc::new(SqliteStore::new(StorageConfig {
        database_path: tmp.path().join("wikoo.db").to_string_lossy().into_owned(),
        wal_mode: true,
    }));
    store.initialize().await.unwrap();

    let conversations = ConversationStore::new(store.clone());
    let companion = Arc::new(ScriptedCompanion::with_outcomes([
        Scripted::Reply("That sounds lovely".into()),
        Scripted::Reply("Your week looks bright.".into()),
    ]));

    let chat = ChatSession::new(conversations.clone(), companion.clone(), Language::English);
    chat.open().await.unwrap();
    chat.send("I had a great walk").await.unwrap();

    let mut orch = ReportOrchestrator::new(conversations, companion.clone(), Language::English);
    let result = orch.generate_on(date()).await.unwrap();
    assert_eq!(result.text, "Your week looks bright.");

    let requests = companion.report_requests();
    assert_eq!(requests[0].chat_context, "I had a great walk");
    assert_eq!(requests[0].mood_score, 1.0);
}
