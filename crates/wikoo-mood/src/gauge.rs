// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mood score to display gauge mapping.

use wikoo_core::{MoodScore, MoodTier};

/// Scores strictly beyond this magnitude leave the Balanced tier.
const TIER_THRESHOLD: f64 = 0.3;

/// A score rendered for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodGauge {
    /// Gauge fill in `[0, 100]`.
    pub value: f64,
    pub tier: MoodTier,
}

impl MoodGauge {
    pub fn style(&self) -> TierStyle {
        TierStyle::for_tier(self.tier)
    }

    /// Text bar `[#####.....]` `width` cells wide, for terminals.
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.value / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
    }
}

/// Label and colors for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    pub label: &'static str,
    /// Utility class for the tier's text color.
    pub text_class: &'static str,
    /// Hex color of the gauge arc.
    pub arc_color: &'static str,
}

impl TierStyle {
    pub fn for_tier(tier: MoodTier) -> Self {
        match tier {
            MoodTier::Low => TierStyle {
                label: "Feeling Low",
                text_class: "text-red-600",
                arc_color: "#ef4444",
            },
            MoodTier::Balanced => TierStyle {
                label: "Balanced",
                text_class: "text-yellow-600",
                arc_color: "#eab308",
            },
            MoodTier::Good => TierStyle {
                label: "Feeling Good",
                text_class: "text-green-600",
                arc_color: "#22c55e",
            },
        }
    }
}

/// Pure `score -> gauge` mapping. No smoothing, no hysteresis.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodGaugeMapper;

impl MoodGaugeMapper {
    pub fn map(score: MoodScore) -> MoodGauge {
        MoodGauge {
            value: (score.value() + 1.0) * 50.0,
            tier: Self::tier(score),
        }
    }

    /// Low below -0.3, Good above 0.3, Balanced in between (inclusive).
    pub fn tier(score: MoodScore) -> MoodTier {
        let s = score.value();
        if s < -TIER_THRESHOLD {
            MoodTier::Low
        } else if s > TIER_THRESHOLD {
            MoodTier::Good
        } else {
            MoodTier::Balanced
        }
    }
}
