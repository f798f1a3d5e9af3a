// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted state keys. One opaque value per key, device-scoped.

pub const USER: &str = "wikoo_user";
pub const CHAT_HISTORY: &str = "wikoo_chat_history";
pub const LANGUAGE: &str = "wikoo_language";
pub const MOOD: &str = "wikoo_mood";

/// Every key this crate writes.
pub const ALL: [&str; 4] = [USER, CHAT_HISTORY, LANGUAGE, MOOD];
