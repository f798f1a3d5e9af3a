// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Wikoo workspace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Who authored an utterance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One turn in the conversation.
///
/// Only insertion order identifies an utterance; there is no id or timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub sender: Sender,
    pub text: String,
}

impl Utterance {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// The chronological conversation log for this device.
pub type ConversationLog = Vec<Utterance>;

/// Extract the user-authored texts of a log, in order.
pub fn user_texts(log: &[Utterance]) -> Vec<&str> {
    log.iter()
        .filter(|u| u.is_user())
        .map(|u| u.text.as_str())
        .collect()
}

/// Summary of conversation sentiment, always within `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct MoodScore(f64);

impl MoodScore {
    pub const MIN: MoodScore = MoodScore(-1.0);
    pub const NEUTRAL: MoodScore = MoodScore(0.0);
    pub const MAX: MoodScore = MoodScore(1.0);

    /// Build a score, clamping into `[-1, 1]`. NaN collapses to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        MoodScore(value.clamp(-1.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for MoodScore {
    fn from(value: f64) -> Self {
        MoodScore::new(value)
    }
}

impl From<MoodScore> for f64 {
    fn from(score: MoodScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for MoodScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2}", self.0)
    }
}

/// Coarse mood bucket derived from a [`MoodScore`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum MoodTier {
    Low,
    Balanced,
    Good,
}

/// Where the text of a [`ReportResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum ReportSource {
    /// The remote generator produced the text.
    Service,
    /// The remote call failed and the localized fallback was substituted.
    Fallback,
    /// There were no user utterances; nothing was sent anywhere.
    NoConversation,
}

/// The outcome of one report generation request.
///
/// `succeeded` reflects what the user sees: a service failure still yields a
/// card (with fallback text) and reports `true`. `source` keeps the real
/// provenance for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResult {
    pub text: String,
    /// `None` when no user utterances existed and scoring was skipped.
    pub mood_score: Option<MoodScore>,
    pub succeeded: bool,
    pub source: ReportSource,
    pub generated_on: NaiveDate,
}

/// A synthetic voice offered by the speech platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Identifier the synthesizer understands.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Locale tag, e.g. `en-US` or `hi`.
    pub locale: String,
}

/// Local account record. There is no credential attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

/// A standalone mood picked by the user outside of chat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MoodSelection {
    Great,
    Good,
    Okay,
    Low,
    Bad,
}

// --- Remote service request bodies ---

/// Body of the report generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequest {
    /// User utterances joined by a blank line.
    pub chat_context: String,
    /// Date as `dd/mm/yyyy`.
    pub date: String,
    pub lang: String,
    pub mood_score: f64,
}

/// Body of the chat reply call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub lang: String,
}

/// Body of the calendar reminder call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarReminder {
    pub title: String,
    pub description: String,
}

impl Default for CalendarReminder {
    fn default() -> Self {
        Self {
            title: "Daily Wellness Exercise".to_string(),
            description: "From your Wikoo report — take a walk or stretch!".to_string(),
        }
    }
}

/// Body of the email reminder call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailReminder {
    pub subject: String,
    pub body: String,
}

impl Default for EmailReminder {
    fn default() -> Self {
        Self {
            subject: "Wikoo Wellness Reminder".to_string(),
            body: "Don't forget your daily wellness activity! 🌿".to_string(),
        }
    }
}

// --- Adapter plumbing ---

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Degraded(String),
    Unhealthy(String),
}

/// Identifies the kind of adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Store,
    Companion,
    Speech,
}
