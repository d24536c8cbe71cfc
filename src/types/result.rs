//! Analysis result type.

use serde::{Deserialize, Serialize};

use super::{EmotionDimensions, SentimentLabel, Tone};

/// Result of analysing one piece of text.
///
/// Produced by both the base analyzer and the calibration layer. The
/// calibration layer only rewrites `polarity` and `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sentiment polarity in `[-1, 1]`, rounded to two decimals.
    pub polarity: f64,
    pub label: SentimentLabel,
    /// Agreement between the component estimators, in `[0, 1]`.
    pub confidence: f64,
    pub dimensions: EmotionDimensions,
    /// Strongest tone, or [`Tone::Neutral`] when nothing scored.
    pub primary_tone: Tone,
    pub secondary_tone: Option<Tone>,
}

impl AnalysisResult {
    /// The fixed result returned for empty input and for failed analyses.
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
            dimensions: EmotionDimensions::zero(),
            primary_tone: Tone::Neutral,
            secondary_tone: None,
        }
    }

    /// Whether this is exactly the neutral fallback.
    pub fn is_neutral_default(&self) -> bool {
        *self == Self::neutral()
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Round to two decimal places.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
