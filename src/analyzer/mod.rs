//! Base analyzer: blends every signal into one [`AnalysisResult`].
//!
//! One pass per call:
//!
//! 1. two general-purpose estimates ([`estimators`]),
//! 2. the lexicon average and the phrase score,
//!    where a component that cannot tokenize the text scores `0.0`,
//! 3. a weighted sum, corrected by the [`context`] adjuster,
//! 4. sarcasm inversion, clamping and rounding,
//! 5. label, confidence, [`dimensions`] and [`tone`] from the final polarity.

pub mod context;
pub mod dimensions;
pub mod estimators;
pub mod phrases;
pub mod tone;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::lexicon;
use crate::types::{AnalysisResult, SentimentLabel, round2};
use crate::{HuginnError, Result, telemetry};
use estimators::{PatternEstimator, PolarityEstimator, VaderEstimator};

pub const WEIGHT_ESTIMATOR_A: f64 = 0.30;
pub const WEIGHT_ESTIMATOR_B: f64 = 0.20;
pub const WEIGHT_LEXICON: f64 = 0.40;
pub const WEIGHT_PHRASE: f64 = 0.10;

/// Factor applied when a sarcasm indicator inverts a positive score.
pub const SARCASM_DAMPENING: f64 = 0.7;

/// Blend weights for the four raw signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// VADER compound score.
    pub estimator_a: f64,
    /// Pattern-lexicon polarity.
    pub estimator_b: f64,
    pub lexicon: f64,
    pub phrase: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            estimator_a: WEIGHT_ESTIMATOR_A,
            estimator_b: WEIGHT_ESTIMATOR_B,
            lexicon: WEIGHT_LEXICON,
            phrase: WEIGHT_PHRASE,
        }
    }
}

impl Weights {
    /// Reject weights that would poison every score.
    pub fn validate(&self) -> Result<()> {
        let all = [self.estimator_a, self.estimator_b, self.lexicon, self.phrase];
        if all.iter().any(|w| !w.is_finite()) {
            return Err(HuginnError::Configuration(
                "weights must be finite numbers".to_string(),
            ));
        }
        Ok(())
    }
}

/// The base sentiment, dimension and tone analyzer.
pub struct Analyzer {
    estimator_a: Box<dyn PolarityEstimator>,
    estimator_b: Box<dyn PolarityEstimator>,
    weights: Weights,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("estimator_a", &self.estimator_a.name())
            .field("estimator_b", &self.estimator_b.name())
            .field("weights", &self.weights)
            .finish()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Weights::default())
    }
}

impl Analyzer {
    /// Analyzer with the built-in VADER and pattern estimators.
    pub fn new(weights: Weights) -> Self {
        Self::with_estimators(
            Box::new(VaderEstimator::new()),
            Box::new(PatternEstimator::new()),
            weights,
        )
    }

    /// Analyzer with caller-supplied estimators.
    pub fn with_estimators(
        estimator_a: Box<dyn PolarityEstimator>,
        estimator_b: Box<dyn PolarityEstimator>,
        weights: Weights,
    ) -> Self {
        Self {
            estimator_a,
            estimator_b,
            weights,
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Analyze text, falling back to [`AnalysisResult::neutral`] on failure.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.try_analyze(text).unwrap_or_else(|e| {
            warn!(error = %e, "analysis failed, returning neutral result");
            AnalysisResult::neutral()
        })
    }

    /// Analyze text, surfacing non-finite failures.
    ///
    /// A component whose tokenizer rejects the text contributes `0.0` and is
    /// left out of the confidence; any other component error fails the call.
    pub fn try_analyze(&self, text: &str) -> Result<AnalysisResult> {
        if text.trim().is_empty() {
            return Ok(AnalysisResult::neutral());
        }

        let lex = absorb(lexicon::score_lexicon(text), "lexicon")?;
        let a = absorb(self.estimator_a.estimate(text), "estimator a")?;
        let b = absorb(self.estimator_b.estimate(text), "estimator b")?;
        let phrase = phrases::match_phrases(text);

        let w = &self.weights;
        let weighted = w.estimator_a * a.unwrap_or(0.0)
            + w.estimator_b * b.unwrap_or(0.0)
            + w.lexicon * lex.unwrap_or(0.0)
            + w.phrase * phrase.score;

        let mut adjusted = context::adjust(text, weighted);
        if phrase.sarcasm && adjusted > 0.0 {
            adjusted = -adjusted * SARCASM_DAMPENING;
        }
        let polarity = round2(finite(adjusted, "context adjustment")?.clamp(-1.0, 1.0));

        let dimensions = dimensions::emotion_dimensions(&text.to_lowercase(), polarity);
        let (primary_tone, secondary_tone) = tone::classify_tone(text, polarity, &dimensions);

        Ok(AnalysisResult {
            polarity,
            label: SentimentLabel::base(polarity),
            confidence: agreement(&[a, b, lex].into_iter().flatten().collect::<Vec<_>>()),
            dimensions,
            primary_tone,
            secondary_tone,
        })
    }
}

fn finite(value: f64, stage: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HuginnError::NonFinite { stage })
    }
}

/// A component score, or `None` when its tokenizer rejected the text.
fn absorb(result: Result<f64>, stage: &'static str) -> Result<Option<f64>> {
    match result {
        Ok(value) => finite(value, stage).map(Some),
        Err(e @ HuginnError::Tokenization { .. }) => {
            warn!(stage, error = %e, "component skipped, scoring 0.0");
            metrics::counter!(telemetry::COMPONENT_FAILURES_TOTAL, "stage" => stage).increment(1);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// How closely the estimates agree: `1 - spread / 2`, in `[0, 1]`.
///
/// No estimates at all means no agreement.
fn agreement(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let max = scores.iter().map(|s| s.clamp(-1.0, 1.0)).fold(f64::MIN, f64::max);
    let min = scores.iter().map(|s| s.clamp(-1.0, 1.0)).fold(f64::MAX, f64::min);
    round2((1.0 - (max - min) / 2.0).clamp(0.0, 1.0))
}
