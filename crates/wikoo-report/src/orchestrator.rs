// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Report generation state machine.
//!
//! `Idle -> Generating -> Ready`. A generate request on a `Ready`
//! orchestrator replaces the previous result once the new one is built.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use wikoo_core::{
    CompanionService, Language, Phrase, ReportExporter, ReportRequest, ReportResult, ReportSource,
    WikooError, user_texts,
};
use wikoo_mood::{MoodGauge, MoodGaugeMapper, SentimentScorer};
use wikoo_storage::ConversationStore;
use wikoo_voice::{SpeakOutcome, VoiceSelector};

/// Date format sent to the report service.
pub const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Where the orchestrator is in its cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportState {
    Idle,
    Generating,
    Ready(ReportResult),
}

/// Holds the orchestrator in `Generating` and puts the previous state back
/// on drop unless [`PendingState::complete`] ran.
struct PendingState<'a> {
    state: &'a mut ReportState,
    previous: Option<ReportState>,
}

impl<'a> PendingState<'a> {
    fn begin(state: &'a mut ReportState) -> Self {
        let previous = std::mem::replace(state, ReportState::Generating);
        Self {
            state,
            previous: Some(previous),
        }
    }

    fn complete(mut self, result: ReportResult) {
        self.previous = None;
        *self.state = ReportState::Ready(result);
    }
}

impl Drop for PendingState<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.state = previous;
        }
    }
}

/// Turns the conversation log into a scored, narrated report.
pub struct ReportOrchestrator {
    conversations: ConversationStore,
    companion: Arc<dyn CompanionService>,
    scorer: SentimentScorer,
    voice: Option<Arc<VoiceSelector>>,
    language: Language,
    auto_play: bool,
    state: ReportState,
}

impl ReportOrchestrator {
    pub fn new(
        conversations: ConversationStore,
        companion: Arc<dyn CompanionService>,
        language: Language,
    ) -> Self {
        Self {
            conversations,
            companion,
            scorer: SentimentScorer::new(),
            voice: None,
            language,
            auto_play: false,
            state: ReportState::Idle,
        }
    }

    /// Speak reports through `voice`; `auto_play` speaks each one as it becomes ready.
    pub fn with_voice(mut self, voice: Arc<VoiceSelector>, auto_play: bool) -> Self {
        self.voice = Some(voice);
        self.auto_play = auto_play;
        self
    }

    pub fn with_scorer(mut self, scorer: SentimentScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, ReportState::Generating)
    }

    /// The ready report, if any.
    pub fn current(&self) -> Option<&ReportResult> {
        match &self.state {
            ReportState::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Gauge for the ready report's score. `None` when no score was computed.
    pub fn gauge(&self) -> Option<MoodGauge> {
        self.current()
            .and_then(|r| r.mood_score)
            .map(MoodGaugeMapper::map)
    }

    /// Generate a report dated today.
    pub async fn generate(&mut self) -> Result<&ReportResult, WikooError> {
        self.generate_on(chrono::Local::now().date_naive()).await
    }

    /// Generate a report for `date`.
    ///
    /// Only storage errors are returned. A failing report service yields the
    /// localized fallback text instead. If the call errors or its future is
    /// dropped before completion, the previous state is put back.
    pub async fn generate_on(&mut self, date: NaiveDate) -> Result<&ReportResult, WikooError> {
        let pending = PendingState::begin(&mut self.state);
        debug!(lang = self.language.code(), "report generation started");

        let log = self.conversations.load().await?;
        let utterances = user_texts(&log);

        let result = if utterances.is_empty() {
            debug!(entries = log.len(), "no user utterances, skipping report service");
            ReportResult {
                text: self.language.phrase(Phrase::NoConversation).to_string(),
                mood_score: None,
                succeeded: false,
                source: ReportSource::NoConversation,
                generated_on: date,
            }
        } else {
            let score = self.scorer.score(&utterances);
            let request = ReportRequest {
                chat_context: utterances.join("\n\n"),
                date: date.format(REPORT_DATE_FORMAT).to_string(),
                lang: self.language.code().to_string(),
                mood_score: score.value(),
            };

            let (text, source) = match self.companion.generate_report(&request).await {
                Ok(text) => (text, ReportSource::Service),
                Err(e) => {
                    warn!(error = %e, "report service failed, using fallback text");
                    (
                        self.language.phrase(Phrase::ReportFallback).to_string(),
                        ReportSource::Fallback,
                    )
                }
            };
            info!(score = %score, source = %source, "report ready");
            ReportResult {
                text,
                mood_score: Some(score),
                succeeded: true,
                source,
                generated_on: date,
            }
        };

        pending.complete(result);
        if self.auto_play {
            self.speak_current().await;
        }
        match &self.state {
            ReportState::Ready(result) => Ok(result),
            _ => Err(WikooError::Internal("report state changed during generation".into())),
        }
    }

    /// Speak the ready report again.
    pub async fn replay(&self) -> Result<SpeakOutcome, WikooError> {
        let Some(voice) = &self.voice else {
            return Err(WikooError::CapabilityUnsupported(
                "no speech output configured".into(),
            ));
        };
        let Some(result) = self.current().filter(|r| !r.text.is_empty()) else {
            return Err(WikooError::Validation("no report to replay".into()));
        };
        voice
            .speak(&result.text, self.language.locale_tag())
            .await
    }

    /// Export the ready report. Only successful reports can be exported.
    pub fn export(&self, exporter: &dyn ReportExporter) -> Result<PathBuf, WikooError> {
        match self.current() {
            Some(result) if result.succeeded => exporter.export(result),
            _ => Err(WikooError::Validation("no report available to export".into())),
        }
    }

    async fn speak_current(&self) {
        let Some(voice) = &self.voice else {
            return;
        };
        let Some(result) = self.current() else {
            return;
        };
        if !result.succeeded || result.text.is_empty() {
            return;
        }
        match voice.speak(&result.text, self.language.locale_tag()).await {
            Ok(outcome) => debug!(?outcome, "report playback requested"),
            Err(WikooError::CapabilityUnsupported(reason)) => {
                debug!(reason, "speech unavailable, report not spoken");
            }
            Err(e) => warn!(error = %e, "report playback failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikoo_core::{MoodScore, Utterance};
    use wikoo_mood::Lexicon;
    use wikoo_test_utils::{MemoryStore, Scripted, ScriptedCompanion};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
    }

    async fn orchestrator(
        log: Vec<Utterance>,
        companion: Arc<ScriptedCompanion>,
    ) -> ReportOrchestrator {
        let conversations = ConversationStore::new(Arc::new(MemoryStore::new()));
        conversations.save(&log).await.unwrap();
        ReportOrchestrator::new(conversations, companion, Language::English)
    }

    #[tokio::test]
    async fn starts_idle() {
        let orch = orchestrator(Vec::new(), Arc::new(ScriptedCompanion::new())).await;
        assert_eq!(orch.state(), &ReportState::Idle);
        assert!(orch.current().is_none());
        assert!(orch.gauge().is_none());
        assert!(!orch.is_busy());
    }

    #[tokio::test]
    async fn request_carries_context_date_and_language() {
        let companion = Arc::new(ScriptedCompanion::with_outcomes([Scripted::Reply(
            "report".into(),
        )]));
        let mut orch = orchestrator(
            vec![
                Utterance::bot("welcome"),
                Utterance::user("I feel calm"),
                Utterance::bot("nice"),
                Utterance::user("a bit tired"),
            ],
            companion.clone(),
        )
        .await;
        orch.set_language(Language::Hindi);
        orch.generate_on(date()).await.unwrap();

        let requests = companion.report_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].chat_context, "I feel calm\n\na bit tired");
        assert_eq!(requests[0].date, "05/03/2026");
        assert_eq!(requests[0].lang, "hi");
        assert_eq!(requests[0].mood_score, 0.0);
    }

    #[tokio::test]
    async fn regenerate_replaces_previous_result() {
        let companion = Arc::new(ScriptedCompanion::with_outcomes([
            Scripted::Reply("first".into()),
            Scripted::Reply("second".into()),
        ]));
        let mut orch = orchestrator(vec![Utterance::user("hello")], companion.clone()).await;
        assert_eq!(orch.generate_on(date()).await.unwrap().text, "first");
        assert_eq!(orch.generate_on(date()).await.unwrap().text, "second");
        assert_eq!(companion.call_count(), 2);
    }

    #[tokio::test]
    async fn storage_failure_returns_to_idle() {
        let store = Arc::new(MemoryStore::new());
        store.fail_next("disk gone");
        let mut orch = ReportOrchestrator::new(
            ConversationStore::new(store),
            Arc::new(ScriptedCompanion::new()),
            Language::English,
        );
        assert!(orch.generate_on(date()).await.is_err());
        assert_eq!(orch.state(), &ReportState::Idle);
    }

    #[tokio::test]
    async fn storage_failure_keeps_previous_report() {
        let store = Arc::new(MemoryStore::new());
        let conversations = ConversationStore::new(store.clone());
        conversations
            .save(&[Utterance::user("hello")])
            .await
            .unwrap();
        let mut orch = ReportOrchestrator::new(
            conversations,
            Arc::new(ScriptedCompanion::with_outcomes([Scripted::Reply(
                "kept".into(),
            )])),
            Language::English,
        );
        orch.generate_on(date()).await.unwrap();

        store.fail_next("disk gone");
        assert!(orch.generate_on(date()).await.is_err());
        assert!(!orch.is_busy());
        assert_eq!(orch.current().map(|r| r.text.as_str()), Some("kept"));
    }

    #[tokio::test]
    async fn custom_lexicon_drives_the_score() {
        const CALM: Lexicon = Lexicon {
            positive: &["serene"],
            negative: &["gloomy"],
        };
        let companion = Arc::new(ScriptedCompanion::new());
        let mut orch = orchestrator(
            vec![Utterance::user("serene morning, though sad")],
            companion.clone(),
        )
        .await
        .with_scorer(SentimentScorer::with_lexicon(CALM));

        let result = orch.generate_on(date()).await.unwrap();
        assert_eq!(result.mood_score, Some(MoodScore::new(1.0)));
        assert_eq!(companion.report_requests()[0].mood_score, 1.0);
    }

    #[tokio::test]
    async fn replay_without_voice_is_unsupported() {
        let mut orch = orchestrator(
            vec![Utterance::user("good day")],
            Arc::new(ScriptedCompanion::new()),
        )
        .await;
        orch.generate_on(date()).await.unwrap();
        assert!(matches!(
            orch.replay().await,
            Err(WikooError::CapabilityUnsupported(_))
        ));
    }
}
