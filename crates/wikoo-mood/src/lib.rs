// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mood analysis for Wikoo conversations.
//!
//! [`SentimentScorer`] reduces user utterances to a [`MoodScore`](wikoo_core::MoodScore)
//! with a fixed multilingual lexicon; [`MoodGaugeMapper`] turns that score
//! into something to draw.

pub mod gauge;
pub mod sentiment;

pub use gauge::{MoodGauge, MoodGaugeMapper, TierStyle};
pub use sentiment::{Lexicon, ScoreBreakdown, SentimentScorer};
