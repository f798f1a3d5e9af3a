// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::WikooConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LANGUAGE_TAGS: &[&str] = &["en", "ta", "hi"];

/// Validate a deserialized configuration.
///
/// All problems are collected before returning.
pub fn validate_config(config: &WikooConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::invalid(
            "app.log_level",
            format!(
                "`{}` is not one of {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    let lang = config.app.default_language.trim().to_ascii_lowercase();
    if !LANGUAGE_TAGS.iter().any(|tag| lang.starts_with(tag)) {
        errors.push(ConfigError::invalid(
            "app.default_language",
            format!(
                "`{}` is not supported (use one of {})",
                config.app.default_language,
                LANGUAGE_TAGS.join(", ")
            ),
        ));
    }

    if let Err(message) = check_base_url(&config.companion.base_url) {
        errors.push(ConfigError::invalid("companion.base_url", message));
    }
    if config.companion.request_timeout_secs == Some(0) {
        errors.push(ConfigError::invalid(
            "companion.request_timeout_secs",
            "must be greater than zero when set",
        ));
    }
    if config.companion.connect_timeout_secs == Some(0) {
        errors.push(ConfigError::invalid(
            "companion.connect_timeout_secs",
            "must be greater than zero when set",
        ));
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::invalid(
            "storage.database_path",
            "must not be empty",
        ));
    }

    let voice = &config.voice;
    if voice.command.trim().is_empty() {
        errors.push(ConfigError::invalid("voice.command", "must not be empty"));
    }
    if !(voice.rate > 0.0 && voice.rate <= 10.0) {
        errors.push(ConfigError::invalid(
            "voice.rate",
            format!("must be in (0, 10], got {}", voice.rate),
        ));
    }
    if !(0.0..=2.0).contains(&voice.pitch) {
        errors.push(ConfigError::invalid(
            "voice.pitch",
            format!("must be in [0, 2], got {}", voice.pitch),
        ));
    }
    if !(0.0..=1.0).contains(&voice.volume) {
        errors.push(ConfigError::invalid(
            "voice.volume",
            format!("must be in [0, 1], got {}", voice.volume),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_base_url(url: &str) -> Result<(), String> {
    let url = url.trim();
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| format!("`{url}` must start with http:// or https://"))?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(format!("`{url}` has no valid host"));
    }
    Ok(())
}
