//! Sentence-level negation and intensifier adjustment.
//!
//! The base score is spread evenly over the sentences of the text. A
//! sentence containing a negation word flips and dampens its share; every
//! intensifier immediately followed by another word adds that word's
//! valence scaled by the intensifier factor. Negation inside a crisis
//! phrase ("no reason to live") does not count, since the phrase matcher
//! already priced it in.

use tracing::debug;

use super::phrases;
use crate::lexicon::{Lexicon, lexicon};
use crate::telemetry;
use crate::{Result, tokenize};

/// Factor applied to a negated sentence's share of the base score.
pub const NEGATION_DAMPENING: f64 = 0.8;

pub const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "none", "cannot", "don't", "doesn't", "didn't", "wasn't", "weren't",
    "isn't", "aren't", "haven't", "hasn't", "can't", "couldn't", "won't", "wouldn't", "shouldn't",
    // apostrophe-less spellings common in posts
    "dont", "doesnt", "didnt", "isnt", "cant", "couldnt", "wouldnt",
];

/// Intensifier words and the factor applied to the following word's valence.
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.5),
    ("extremely", 2.0),
    ("so", 1.3),
    ("totally", 1.7),
    ("absolutely", 1.8),
    ("completely", 1.8),
    ("utterly", 2.0),
    ("terribly", 1.7),
    ("awful", 1.6),
    ("horrible", 1.8),
    ("fucking", 2.0),
    ("severely", 1.9),
    ("deeply", 1.5),
    ("profoundly", 1.6),
    ("immensely", 1.7),
];

/// Intensifier factor for a word, if it is one.
pub fn intensifier(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, factor)| *factor)
}

pub fn is_negation(word: &str) -> bool {
    NEGATION_WORDS.contains(&word)
}

/// Adjust a weighted base score for negation and intensifiers.
///
/// Sentences that fail to tokenize are skipped: they keep their unadjusted
/// share and the failure is logged. Text without sentences returns
/// `base_score` unchanged.
pub fn adjust(text: &str, base_score: f64) -> f64 {
    let sentences = tokenize::sentences(text);
    if sentences.is_empty() {
        return base_score;
    }
    let share = base_score / sentences.len() as f64;
    let lex = lexicon();

    sentences
        .into_iter()
        .map(|sentence| match adjust_sentence(sentence, share, lex) {
            Ok(contribution) => contribution,
            Err(e) => {
                debug!(error = %e, "skipping sentence in context adjustment");
                metrics::counter!(telemetry::TOKENIZATION_FAILURES_TOTAL, "stage" => "context")
                    .increment(1);
                share
            }
        })
        .sum()
}

fn adjust_sentence(sentence: &str, share: f64, lex: &Lexicon) -> Result<f64> {
    let words = tokenize::words(sentence)?;
    let negated = tokenize::words(&phrases::mask_phrases(sentence))?
        .iter()
        .any(|w| is_negation(w));

    let mut contribution = if negated {
        -share * NEGATION_DAMPENING
    } else {
        share
    };

    for pair in words.windows(2) {
        if let Some(factor) = intensifier(&pair[0]) {
            let valence = lex
                .domain_valence(&pair[1])
                .or_else(|| lex.general_valence(&pair[1]))
                .unwrap_or(0.0);
            contribution += valence * factor;
        }
    }
    Ok(contribution)
}
