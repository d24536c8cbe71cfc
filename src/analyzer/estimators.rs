//! General-purpose polarity estimators.
//!
//! The analyzer blends two independent opinion-lexicon estimates with its
//! own lexicon and phrase scores. Both estimators return a polarity in
//! `[-1, 1]`. VADER handles negation inside its own window; the pattern
//! estimator ignores it. The sentence-level flip belongs to the context
//! adjuster.

use std::collections::HashMap;
use std::sync::LazyLock;

use unicase::UniCase;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::{HuginnError, Result, tokenize};

/// A scorer mapping text to a polarity in `[-1, 1]`.
pub trait PolarityEstimator: Send + Sync {
    /// Estimator name for logs.
    fn name(&self) -> &str;

    /// Polarity of `text` in `[-1, 1]`.
    fn estimate(&self, text: &str) -> Result<f64>;
}

/// Mental-health valences that replace VADER's own.
const VADER_OVERRIDES: &[(&str, f64)] = &[
    ("depressed", -3.0),
    ("depression", -3.0),
    ("anxiety", -2.5),
    ("suicidal", -4.0),
    ("suicide", -4.0),
    ("hopeless", -3.0),
    ("tired", -1.5),
    ("exhausted", -2.0),
    ("trying", 0.5),
];

static AUGMENTED_LEXICON: LazyLock<HashMap<UniCase<&'static str>, f64>> = LazyLock::new(|| {
    let mut lexicon = vader_sentiment::LEXICON.clone();
    for (term, valence) in VADER_OVERRIDES {
        lexicon.insert(UniCase::new(*term), *valence);
    }
    lexicon
});

/// VADER compound score over the stock lexicon plus [`VADER_OVERRIDES`].
pub struct VaderEstimator {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderEstimator {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::from_lexicon(&AUGMENTED_LEXICON),
        }
    }
}

impl Default for VaderEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderEstimator").finish_non_exhaustive()
    }
}

impl PolarityEstimator for VaderEstimator {
    fn name(&self) -> &str {
        "vader"
    }

    fn estimate(&self, text: &str) -> Result<f64> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        if !compound.is_finite() {
            return Err(HuginnError::NonFinite { stage: "vader" });
        }
        Ok(compound)
    }
}

/// Adjective polarities in `[-1, 1]`.
const PATTERN_POLARITY: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("brilliant", 0.9),
    ("beautiful", 0.85),
    ("perfect", 1.0),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("joyful", 0.8),
    ("cheerful", 0.7),
    ("grateful", 0.6),
    ("thankful", 0.6),
    ("lucky", 0.33),
    ("proud", 0.8),
    ("calm", 0.3),
    ("peaceful", 0.5),
    ("hopeful", 0.5),
    ("positive", 0.23),
    ("better", 0.5),
    ("best", 1.0),
    ("fine", 0.42),
    ("okay", 0.5),
    ("strong", 0.43),
    ("safe", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("kind", 0.6),
    ("fun", 0.3),
    ("funny", 0.25),
    ("love", 0.5),
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("miserable", -1.0),
    ("depressed", -0.6),
    ("depressing", -0.6),
    ("lonely", -0.5),
    ("alone", -0.3),
    ("empty", -0.1),
    ("hopeless", -0.8),
    ("worthless", -0.8),
    ("useless", -0.5),
    ("tired", -0.4),
    ("exhausted", -0.4),
    ("sick", -0.71),
    ("hurt", -0.5),
    ("painful", -0.7),
    ("broken", -0.4),
    ("lost", -0.3),
    ("scared", -0.6),
    ("afraid", -0.6),
    ("anxious", -0.25),
    ("nervous", -0.3),
    ("worried", -0.5),
    ("angry", -0.5),
    ("mad", -0.6),
    ("furious", -0.8),
    ("annoying", -0.8),
    ("annoyed", -0.5),
    ("frustrated", -0.7),
    ("frustrating", -0.4),
    ("stupid", -0.8),
    ("dead", -0.2),
    ("hard", -0.29),
    ("difficult", -0.5),
    ("wrong", -0.5),
    ("ugly", -0.7),
    ("disgusting", -1.0),
    ("boring", -1.0),
    ("negative", -0.3),
    ("pointless", -0.5),
    ("numb", -0.4),
];

/// Multipliers applied to the next word's polarity.
const PATTERN_INTENSITY: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("so", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("totally", 1.3),
    ("absolutely", 1.4),
    ("completely", 1.4),
    ("utterly", 1.5),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("barely", 0.5),
];

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Mean adjective polarity, with intensity multipliers.
///
/// Only words found in the pattern lexicon count toward the mean. A word
/// preceded by an intensity modifier ("very good") is scaled by that
/// modifier before averaging. Sentences that fail to tokenize are skipped.
#[derive(Debug, Default)]
pub struct PatternEstimator;

impl PatternEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityEstimator for PatternEstimator {
    fn name(&self) -> &str {
        "pattern"
    }

    fn estimate(&self, text: &str) -> Result<f64> {
        let words = tokenize::words_by_sentence(text, "pattern")?;
        let mut total = 0.0;
        let mut matched = 0usize;
        for (i, word) in words.iter().enumerate() {
            let Some(polarity) = lookup(PATTERN_POLARITY, word) else {
                continue;
            };
            let intensity = i
                .checked_sub(1)
                .and_then(|prev| lookup(PATTERN_INTENSITY, &words[prev]))
                .unwrap_or(1.0);
            total += polarity * intensity;
            matched += 1;
        }
        if matched == 0 {
            return Ok(0.0);
        }
        Ok((total / matched as f64).clamp(-1.0, 1.0))
    }
}
