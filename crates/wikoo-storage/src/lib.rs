// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for the Wikoo companion.
//!
//! A single key/value table holds the device-local state. Typed stores on
//! top of any [`KeyValueStore`](wikoo_core::KeyValueStore) expose the
//! conversation log and the profile records.

pub mod adapter;
pub mod conversation;
pub mod database;
pub mod keys;
pub mod migrations;
pub mod profile;
pub mod queries;

pub use adapter::SqliteStore;
pub use conversation::ConversationStore;
pub use database::Database;
pub use profile::ProfileStore;
