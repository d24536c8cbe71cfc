//! Sentiment polarity labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Polarity above which both layers label text `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.15;

/// Polarity below which the base analyzer labels text `Negative`.
pub const BASE_NEGATIVE_THRESHOLD: f64 = -0.15;

/// Polarity below which the calibration layer labels text `Negative`.
///
/// Deliberately looser than [`BASE_NEGATIVE_THRESHOLD`]; the two layers
/// disagree for polarities in `[-0.15, -0.10)`.
pub const CALIBRATED_NEGATIVE_THRESHOLD: f64 = -0.10;

/// Coarse sentiment label derived from polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label a polarity with the shared positive threshold and the given
    /// negative threshold. Both comparisons are strict.
    pub fn from_polarity(polarity: f64, negative_threshold: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Label used by the base analyzer.
    pub fn base(polarity: f64) -> Self {
        Self::from_polarity(polarity, BASE_NEGATIVE_THRESHOLD)
    }

    /// Label used by the calibration layer.
    pub fn calibrated(polarity: f64) -> Self {
        Self::from_polarity(polarity, CALIBRATED_NEGATIVE_THRESHOLD)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
