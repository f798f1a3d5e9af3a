// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Wikoo companion.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use wikoo_core::Language;

/// Top-level Wikoo configuration.
///
/// Every section is optional and falls back to the compiled defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WikooConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Remote companion service endpoint.
    #[serde(default)]
    pub companion: CompanionConfig,

    /// Local persistence.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Speech output.
    #[serde(default)]
    pub voice: VoiceConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in the CLI banner.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Language used until the user picks one. A tag such as `en`, `ta`, `hi`.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl AppConfig {
    /// The configured default language, resolved the same way stored tags are.
    pub fn language(&self) -> Language {
        Language::from_tag(&self.default_language)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
            default_language: default_language(),
        }
    }
}

fn default_app_name() -> String {
    "wikoo".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Remote companion service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CompanionConfig {
    /// Base URL of the report/chat/reminder service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout. Unset means requests may wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// TCP connect timeout.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

/// Local storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("wikoo").join("wikoo.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("wikoo.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Speech output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceConfig {
    /// Master switch for speech output.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// External text-to-speech program.
    #[serde(default = "default_voice_command")]
    pub command: String,

    /// Speaking rate multiplier (1.0 is the engine's normal speed).
    #[serde(default = "default_rate")]
    pub rate: f32,

    /// Pitch multiplier.
    #[serde(default = "default_pitch")]
    pub pitch: f32,

    /// Volume in `[0, 1]`.
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Read finished reports aloud automatically.
    #[serde(default = "default_true")]
    pub auto_play_reports: bool,

    /// Read chat replies aloud automatically.
    #[serde(default = "default_true")]
    pub auto_play_replies: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_voice_command(),
            rate: default_rate(),
            pitch: default_pitch(),
            volume: default_volume(),
            auto_play_reports: true,
            auto_play_replies: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_voice_command() -> String {
    "espeak-ng".to_string()
}

fn default_rate() -> f32 {
    0.9
}

fn default_pitch() -> f32 {
    1.1
}

fn default_volume() -> f32 {
    1.0
}
