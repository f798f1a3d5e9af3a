// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Wikoo wellness companion.
//!
//! This crate provides the trait definitions, error types, and common types
//! used throughout the Wikoo workspace. Storage, the remote companion
//! service, and speech synthesis are all reached through traits defined here.

pub mod error;
pub mod language;
pub mod traits;
pub mod types;

pub use error::WikooError;
pub use language::{Language, Phrase};
pub use types::{
    AdapterType, CalendarReminder, ChatRequest, ConversationLog, EmailReminder, HealthStatus,
    MoodScore, MoodSelection, MoodTier, ReportRequest, ReportResult, ReportSource, Sender,
    UserRecord, Utterance, Voice, user_texts,
};

pub use traits::speech::SpeechRequest;
pub use traits::{
    CompanionService, KeyValueStore, PluginAdapter, ReportExporter, SpeechSynthesizer,
};
