// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword sentiment scoring.
//!
//! Each utterance is lowercased and checked for every lexicon token by
//! substring containment, so "unhappy" matches "happy" and "badminton"
//! matches "bad". Each token counts at most once per utterance.

use wikoo_core::MoodScore;

/// Positive tokens: English, Hindi, Tamil.
const POSITIVE: &[&str] = &[
    "happy", "good", "great", "better", "calm", "relaxed", "thank", "love", "hope", "joy",
    "peace", "अच्छा", "खुश", "शांत", "अच्छी", "खुशी", "நல்ல", "மகிழ்ச்சி", "அமைதி",
];

/// Negative tokens: English, Hindi, Tamil.
const NEGATIVE: &[&str] = &[
    "sad", "stress", "anxious", "tired", "bad", "worry", "alone", "angry", "fear", "दुखी",
    "तनाव", "चिंता", "थक", "डर", "துக்கம்", "கவலை", "கோபம்", "பயம்",
];

/// Two disjoint sets of lowercase sentiment tokens.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

impl Lexicon {
    /// The built-in multilingual lexicon.
    pub const DEFAULT: Lexicon = Lexicon {
        positive: POSITIVE,
        negative: NEGATIVE,
    };
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-call detail of how a score was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub utterances: usize,
    /// Positive tokens matched, in utterance order (repeats across utterances).
    pub positive_hits: Vec<&'static str>,
    pub negative_hits: Vec<&'static str>,
    /// Positive hits minus negative hits.
    pub total: i64,
    pub score: MoodScore,
}

/// Pure, deterministic keyword scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score user-authored utterances. Bot turns must already be excluded.
    ///
    /// The net hit count is averaged over the utterances and clamped to
    /// `[-1, 1]`. No utterances score exactly zero.
    pub fn score<S: AsRef<str>>(&self, utterances: &[S]) -> MoodScore {
        self.analyze(utterances).score
    }

    pub fn analyze<S: AsRef<str>>(&self, utterances: &[S]) -> ScoreBreakdown {
        let mut positive_hits = Vec::new();
        let mut negative_hits = Vec::new();

        for utterance in utterances {
            let lower = utterance.as_ref().to_lowercase();
            positive_hits.extend(self.lexicon.positive.iter().filter(|t| lower.contains(**t)));
            negative_hits.extend(self.lexicon.negative.iter().filter(|t| lower.contains(**t)));
        }

        let total = positive_hits.len() as i64 - negative_hits.len() as i64;
        let score = if utterances.is_empty() {
            MoodScore::NEUTRAL
        } else {
            MoodScore::new(total as f64 / utterances.len() as f64)
        };

        tracing::trace!(
            utterances = utterances.len(),
            total,
            score = score.value(),
            "sentiment scored"
        );

        ScoreBreakdown {
            utterances: utterances.len(),
            positive_hits,
            negative_hits,
            total,
            score,
        }
    }
}
