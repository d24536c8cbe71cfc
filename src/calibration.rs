//! Calibration layer: a second opinion on the base polarity.
//!
//! The calibrator ignores the base lexicons entirely. It counts words from
//! its own small positive/negative/negation sets, then nudges the base
//! polarity with a fixed sequence of rules, including tone-consistency
//! checks against the base result's primary tone. Only `polarity` and
//! `label` change; confidence, dimensions and tones pass through.

use tracing::{info, warn};

use crate::telemetry;
use crate::types::{AnalysisResult, SentimentLabel, Tone, round2};

/// Default polarity shift above which an adjustment is logged.
pub const DEFAULT_LOG_THRESHOLD: f64 = 0.2;

pub const NEGATIVE_WORDS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "nowhere", "hardly", "barely",
    "scarcely", "tired", "drained", "exhausted", "sad", "disappointed", "hurt", "pain", "struggle",
    "difficult", "hard", "sick", "lonely", "alone", "depressed", "anxiety", "anxious", "stress",
    "stressed",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "happy", "joy", "love", "wonderful",
    "fantastic", "brilliant", "beautiful", "success", "successful", "accomplish", "achievement",
    "grateful", "thankful", "appreciate", "blessed",
];

/// Whole-token negations. Any other token ending in "n't" ("don't",
/// "didn't", "won't") also negates; see [`count_words`].
pub const NEGATION_WORDS: &[&str] = &["not", "no", "never", "n't", "cannot", "cant", "can't"];

const STRIP: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\''];

/// Word counts the calibration rules run on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCounts {
    pub negative: usize,
    pub positive: usize,
    pub negated: bool,
}

/// Count calibration words in whitespace-separated, punctuation-stripped text.
pub fn count_words(text: &str) -> WordCounts {
    let lower = text.to_lowercase().replace('\u{2019}', "'");
    let mut counts = WordCounts::default();
    for token in lower.split_whitespace() {
        let token = token.trim_matches(STRIP);
        if token.is_empty() {
            continue;
        }
        if NEGATIVE_WORDS.contains(&token) {
            counts.negative += 1;
        }
        if POSITIVE_WORDS.contains(&token) {
            counts.positive += 1;
        }
        if NEGATION_WORDS.contains(&token) || token.ends_with("n't") {
            counts.negated = true;
        }
    }
    counts
}

/// Apply the calibration rules to a polarity. Clamped and rounded.
pub fn recalibrate(polarity: f64, counts: WordCounts, primary: Tone) -> f64 {
    let mut p = polarity;

    if counts.negated {
        if p > 0.1 {
            p = (p * -0.5).max(-0.1);
        } else if p < -0.1 {
            p *= if counts.negative > counts.positive { 1.2 } else { 0.5 };
        }
    }

    if counts.negative > 2 && p > 0.0 {
        p *= 1.0 - 0.15 * counts.negative as f64;
    }
    if counts.positive > 2 && p < 0.0 {
        p *= 1.0 - 0.15 * counts.positive as f64;
    }

    match primary {
        Tone::Neutral | Tone::Reflective if p.abs() > 0.3 => p *= 0.7,
        Tone::Angry | Tone::Frustrated | Tone::Melancholic if p > 0.1 => p *= 0.5,
        Tone::Grateful | Tone::Hopeful if p < -0.1 => p *= 0.5,
        _ => {}
    }

    round2(p.clamp(-1.0, 1.0))
}

/// Stateless post-processor for base analysis results.
#[derive(Debug, Clone)]
pub struct Calibrator {
    log_threshold: f64,
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calibrator {
    pub fn new() -> Self {
        Self {
            log_threshold: DEFAULT_LOG_THRESHOLD,
        }
    }

    /// Log and count adjustments larger than `threshold`.
    pub fn with_log_threshold(threshold: f64) -> Self {
        Self {
            log_threshold: threshold,
        }
    }

    pub fn log_threshold(&self) -> f64 {
        self.log_threshold
    }

    /// Recalibrate a base result for the text it was computed from.
    ///
    /// A non-finite recalibration returns `base` unchanged.
    pub fn calibrate(&self, text: &str, base: &AnalysisResult) -> AnalysisResult {
        let counts = count_words(text);
        let polarity = recalibrate(base.polarity, counts, base.primary_tone);

        if !polarity.is_finite() {
            warn!(
                base_polarity = base.polarity,
                "calibration produced a non-finite polarity, keeping base result"
            );
            return base.clone();
        }

        let shift = (polarity - base.polarity).abs();
        if shift > self.log_threshold {
            info!(
                from = base.polarity,
                to = polarity,
                negative = counts.negative,
                positive = counts.positive,
                negated = counts.negated,
                tone = %base.primary_tone,
                "major calibration adjustment"
            );
            metrics::counter!(telemetry::MAJOR_CALIBRATIONS_TOTAL).increment(1);
        }

        AnalysisResult {
            polarity,
            label: SentimentLabel::calibrated(polarity),
            ..base.clone()
        }
    }
}
