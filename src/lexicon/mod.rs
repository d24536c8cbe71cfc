//! Lexicon store: term → valence.
//!
//! Two lexicons are merged once, on first use, into a process-wide
//! read-only map:
//!
//! - the general-purpose VADER lexicon (valences roughly in `[-4, 4]`),
//!   lowercased, and
//! - the mental-health lexicon in [`domain`], which wins on conflicts.
//!
//! There is no mutation API. Everything downstream reads through
//! [`lexicon()`].

mod domain;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Result;
use crate::tokenize;

static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::embedded);

/// The process-wide merged lexicon.
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

/// Average valence of the words in `text` under the merged lexicon.
///
/// Sums the valence of every known token and divides by the total token
/// count (known or not). Text with no tokens scores `0.0`. Sentences that
/// fail to tokenize are left out.
pub fn score_lexicon(text: &str) -> Result<f64> {
    lexicon().score(text)
}

/// Merged general + domain lexicon.
#[derive(Debug)]
pub struct Lexicon {
    general: HashMap<String, f64>,
    domain: HashMap<&'static str, f64>,
    merged: HashMap<String, f64>,
}

impl Lexicon {
    fn embedded() -> Self {
        let general = vader_sentiment::LEXICON
            .iter()
            .map(|(term, valence)| (term.to_lowercase(), *valence))
            .collect();
        Self::from_parts(general, domain::DOMAIN_LEXICON)
    }

    fn from_parts(general: HashMap<String, f64>, domain: &[(&'static str, f64)]) -> Self {
        let domain: HashMap<&'static str, f64> = domain.iter().copied().collect();
        let mut merged = general.clone();
        for (term, valence) in &domain {
            merged.insert((*term).to_string(), *valence);
        }
        Self {
            general,
            domain,
            merged,
        }
    }

    /// Valence in the merged lexicon.
    pub fn valence(&self, term: &str) -> Option<f64> {
        self.merged.get(term).copied()
    }

    /// Valence in the mental-health lexicon only.
    pub fn domain_valence(&self, term: &str) -> Option<f64> {
        self.domain.get(term).copied()
    }

    /// Valence in the general lexicon only.
    pub fn general_valence(&self, term: &str) -> Option<f64> {
        self.general.get(term).copied()
    }

    /// Mean valence over already-tokenized words.
    pub fn score_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let total: f64 = tokens
            .iter()
            .filter_map(|t| self.valence(t.as_ref()))
            .sum();
        total / tokens.len() as f64
    }

    /// Tokenize and score text. See [`score_lexicon`].
    pub fn score(&self, text: &str) -> Result<f64> {
        let tokens = tokenize::words_by_sentence(text, "lexicon")?;
        Ok(self.score_tokens(&tokens))
    }

    /// Number of distinct terms after merging.
    pub fn len(&self) -> usize {
        self.merged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}
