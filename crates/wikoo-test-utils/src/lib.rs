// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles for Wikoo integration tests.
//!
//! - [`MemoryStore`] - in-memory key/value store with injectable failures
//! - [`ScriptedCompanion`] - companion service replaying queued outcomes
//! - [`RecordingSynthesizer`] - speech engine that records what it was asked to say

pub mod companion;
pub mod speech;
pub mod store;

pub use companion::{Scripted, ScriptedCompanion};
pub use speech::RecordingSynthesizer;
pub use store::MemoryStore;
