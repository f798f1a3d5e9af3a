// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the Wikoo companion.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod companion;
pub mod export;
pub mod speech;
pub mod store;

pub use adapter::PluginAdapter;
pub use companion::CompanionService;
pub use export::ReportExporter;
pub use speech::SpeechSynthesizer;
pub use store::KeyValueStore;
