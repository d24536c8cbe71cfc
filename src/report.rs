//! Aggregation of post records into a summary and advisory assessment.
//!
//! The assessment is a screening heuristic over aggregate signals. It is
//! not a diagnosis and is reported as advisory only.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::PostRecord;
use crate::types::{EMOTION_LABELS, EmotionDimensions, round2};

/// Emotion labels counted toward the indicator share.
pub const INDICATOR_LABELS: &[&str] = &[
    "Depression",
    "Anxiety",
    "Stress",
    "Suicidal",
    "sadness",
    "worry",
    "empty",
];

/// Assessment thresholds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssessmentConfig {
    /// Indicator share (percent) that alone signals concern (default: 50).
    #[serde(default = "default_direct_share")]
    pub direct_share: f64,
    /// Indicator share (percent) counting as one strong indicator (default: 15).
    #[serde(default = "default_indicator_share")]
    pub indicator_share: f64,
    /// Average distress for the distress indicator (default: 0.6).
    #[serde(default = "default_distress")]
    pub distress: f64,
    /// Average hopelessness required alongside distress (default: 0.5).
    #[serde(default = "default_hopelessness")]
    pub hopelessness: f64,
    /// Average polarity at or below which sentiment counts (default: -0.3).
    #[serde(default = "default_polarity")]
    pub polarity: f64,
    /// Strong indicators needed without a direct share (default: 2).
    #[serde(default = "default_required_indicators")]
    pub required_indicators: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            direct_share: default_direct_share(),
            indicator_share: default_indicator_share(),
            distress: default_distress(),
            hopelessness: default_hopelessness(),
            polarity: default_polarity(),
            required_indicators: default_required_indicators(),
        }
    }
}

fn default_direct_share() -> f64 {
    50.0
}

fn default_indicator_share() -> f64 {
    15.0
}

fn default_distress() -> f64 {
    0.6
}

fn default_hopelessness() -> f64 {
    0.5
}

fn default_polarity() -> f64 {
    -0.3
}

fn default_required_indicators() -> usize {
    2
}

/// Advisory screening outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub has_signs: bool,
    /// Percentage of classified posts with an indicator label.
    pub indicator_share: f64,
    /// Strong indicators met (share, distress with hopelessness, polarity).
    pub strong_indicators: usize,
    /// Whether the indicator share alone decided the outcome.
    pub direct: bool,
    pub details: String,
}

impl Assessment {
    /// Assess aggregate signals.
    pub fn evaluate(
        indicator_share: f64,
        dimensions: &EmotionDimensions,
        polarity: f64,
        config: &AssessmentConfig,
    ) -> Self {
        let direct = indicator_share >= config.direct_share;
        let strong_indicators = [
            indicator_share >= config.indicator_share,
            dimensions.distress >= config.distress && dimensions.hopelessness >= config.hopelessness,
            polarity <= config.polarity,
        ]
        .into_iter()
        .filter(|met| *met)
        .count();
        let has_signs = direct || strong_indicators >= config.required_indicators;

        let lead = match (has_signs, direct) {
            (true, true) => {
                "The user shows significant indicators of depression with a high depression score."
            }
            (true, false) => "The user shows significant indicators of depression.",
            (false, _) => "The user doesn't show significant indicators of depression.",
        };
        let details = format!(
            "{lead} Depression indicators: {:.1}%, Distress level: {:.1}/10, \
             Hopelessness: {:.1}/10, Overall sentiment: {:.2}.",
            indicator_share,
            dimensions.distress * 10.0,
            dimensions.hopelessness * 10.0,
            polarity,
        );

        Self {
            has_signs,
            indicator_share,
            strong_indicators,
            direct,
            details,
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_signs {
            f.write_str("Has signs of depression")
        } else {
            f.write_str("Doesn't have signs of depression")
        }
    }
}

/// Count and share of one label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LabelCount {
    pub count: usize,
    /// Percentage of the relevant total, rounded to two decimals.
    pub percentage: f64,
}

/// Aggregate view over a batch of post records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    /// Posts carrying an emotion prediction.
    pub classified: usize,
    /// Per emotion label, over classified posts. Every catalogue label is
    /// present, with zero counts where unseen.
    pub emotions: BTreeMap<String, LabelCount>,
    /// Per calibrated sentiment label, over all posts.
    pub sentiments: BTreeMap<String, LabelCount>,
    /// Per primary tone, over all posts.
    pub tones: BTreeMap<String, LabelCount>,
    pub average_polarity: f64,
    pub average_dimensions: EmotionDimensions,
    pub assessment: Assessment,
}

impl Summary {
    pub fn from_records(records: &[PostRecord], config: &AssessmentConfig) -> Self {
        let mut emotions: BTreeMap<String, usize> =
            EMOTION_LABELS.iter().map(|l| ((*l).to_string(), 0)).collect();
        let mut sentiments = BTreeMap::new();
        let mut tones = BTreeMap::new();
        let mut classified = 0;
        let mut indicators = 0;

        for record in records {
            if let Some(prediction) = &record.emotion {
                classified += 1;
                *emotions.entry(prediction.label.clone()).or_default() += 1;
                if INDICATOR_LABELS.contains(&prediction.label.as_str()) {
                    indicators += 1;
                }
            }
            *sentiments
                .entry(record.analysis.label.to_string())
                .or_default() += 1;
            *tones
                .entry(record.analysis.primary_tone.to_string())
                .or_default() += 1;
        }

        let total = records.len();
        let indicator_share = percentage(indicators, classified);
        let average_polarity = if total == 0 {
            0.0
        } else {
            round2(records.iter().map(|r| r.analysis.polarity).sum::<f64>() / total as f64)
        };
        let average_dimensions =
            EmotionDimensions::mean(records.iter().map(|r| &r.analysis.dimensions));
        let assessment =
            Assessment::evaluate(indicator_share, &average_dimensions, average_polarity, config);

        Self {
            total,
            classified,
            emotions: shares(emotions, classified),
            sentiments: shares(sentiments, total),
            tones: shares(tones, total),
            average_polarity,
            average_dimensions,
            assessment,
        }
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

fn shares(counts: BTreeMap<String, usize>, total: usize) -> BTreeMap<String, LabelCount> {
    counts
        .into_iter()
        .map(|(label, count)| {
            let share = LabelCount {
                count,
                percentage: round2(percentage(count, total)),
            };
            (label, share)
        })
        .collect()
}
