//! Categorical emotion predictions from the external classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label catalogue of the emotion classifier the engine is paired with.
pub const EMOTION_LABELS: &[&str] = &[
    "Anxiety",
    "Bipolar",
    "Depression",
    "Personality disorder",
    "Stress",
    "Suicidal",
    "anger",
    "boredom",
    "empty",
    "enthusiasm",
    "fun",
    "happiness",
    "hate",
    "love",
    "neutral",
    "relief",
    "sadness",
    "surprise",
    "worry",
];

/// Labels treated as high-severity when predicted.
pub const HIGH_SEVERITY_LABELS: &[&str] = &["Depression", "Suicidal", "Anxiety"];

/// A categorical emotion label with the classifier's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPrediction {
    pub label: String,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
}

impl EmotionPrediction {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Severity band of this prediction.
    pub fn severity(&self) -> Severity {
        Severity::classify(&self.label, self.confidence)
    }
}

/// Severity band of a categorical prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "High Severity")]
    High,
    #[serde(rename = "Moderate Severity")]
    Moderate,
    #[serde(rename = "Low Severity")]
    Low,
}

impl Severity {
    /// Band a prediction.
    ///
    /// High-severity labels reach `High` at 0.65 confidence; every other
    /// label needs 0.75. Both reach `Moderate` at 0.50.
    pub fn classify(label: &str, confidence: f64) -> Self {
        let high = if HIGH_SEVERITY_LABELS.contains(&label) {
            0.65
        } else {
            0.75
        };
        if confidence >= high {
            Severity::High
        } else if confidence >= 0.50 {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::High => "High Severity",
            Severity::Moderate => "Moderate Severity",
            Severity::Low => "Low Severity",
        };
        f.write_str(s)
    }
}
