// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `/etc/wikoo/wikoo.toml`, then `~/.config/wikoo/wikoo.toml`,
//! then `./wikoo.toml`, with `WIKOO_` environment variables applied last.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::WikooConfig;

pub(crate) const SYSTEM_CONFIG: &str = "/etc/wikoo/wikoo.toml";
pub(crate) const LOCAL_CONFIG: &str = "wikoo.toml";

/// Path of the per-user config file, if the platform has a config dir.
pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wikoo").join("wikoo.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/wikoo/wikoo.toml`
/// 3. `~/.config/wikoo/wikoo.toml`
/// 4. `./wikoo.toml`
/// 5. `WIKOO_*` environment variables
pub fn load_config() -> Result<WikooConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<WikooConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WikooConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<WikooConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WikooConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(WikooConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Map `WIKOO_SECTION_KEY` to `section.key`.
///
/// Uses `Env::map()` rather than `split("_")` so underscore-containing keys
/// survive: `WIKOO_COMPANION_BASE_URL` becomes `companion.base_url`.
fn env_provider() -> Env {
    Env::prefixed("WIKOO_").map(|key| map_env_key(key.as_str()).into())
}

pub(crate) fn map_env_key(key: &str) -> String {
    for section in ["app", "companion", "storage", "voice"] {
        if let Some(rest) = key.strip_prefix(section) {
            if let Some(field) = rest.strip_prefix('_') {
                return format!("{section}.{field}");
            }
        }
    }
    key.to_string()
}
