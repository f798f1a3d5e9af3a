// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Speech output for Wikoo.
//!
//! The platform's voice list may arrive after the first request to speak.
//! [`VoiceCatalog`] publishes it once it is known and [`VoiceSelector`]
//! either speaks immediately or defers a single attempt until it lands.

pub mod catalog;
pub mod command;
pub mod selector;

pub use catalog::VoiceCatalog;
pub use command::CommandSynthesizer;
pub use selector::{SpeakOutcome, VoiceSelector, VoiceSettings, select_voice};
