//! Multi-word idiom and sarcasm detection.
//!
//! Phrases are matched as case-insensitive substrings, not token sequences,
//! so "kill myself" also fires inside "I could kill myself laughing". Every
//! matching phrase adds its valence. The lexicon layer may score the same
//! words again ("kill", "hate"); that overlap is accepted and amplifies
//! crisis language.

/// Fixed idioms with dedicated valences.
pub const CRISIS_PHRASES: &[(&str, f64)] = &[
    ("kill myself", -4.0),
    ("want to die", -4.0),
    ("end it all", -3.5),
    ("give up", -2.5),
    ("lost hope", -3.0),
    ("cant take it", -3.0),
    ("can't take it", -3.0),
    ("tired of life", -3.5),
    ("better off dead", -4.0),
    ("no reason to live", -3.5),
    ("hate myself", -3.0),
    ("whats the point", -2.5),
    ("what's the point", -2.5),
    ("never be happy", -3.0),
    ("nobody cares", -2.5),
    ("feel nothing", -2.0),
    ("too much to handle", -2.5),
    ("no one understands", -2.0),
];

/// Substrings suggesting the literal sentiment should not be trusted.
pub const SARCASM_INDICATORS: &[&str] = &[
    "yeah right",
    "sure thing",
    "as if",
    "whatever",
    "like that would",
    "like that will",
    "of course",
    "wow",
    "amazing",
    "fantastic",
    "great",
    "awesome",
    "perfect",
];

/// Outcome of a phrase scan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhraseMatch {
    /// Summed valence of every matching phrase.
    pub score: f64,
    /// Whether any sarcasm indicator occurred.
    pub sarcasm: bool,
}

/// Scan text for crisis phrases and sarcasm indicators.
pub fn match_phrases(text: &str) -> PhraseMatch {
    let lower = text.to_lowercase();
    let score = CRISIS_PHRASES
        .iter()
        .filter(|(phrase, _)| lower.contains(phrase))
        .map(|(_, valence)| valence)
        .sum();
    let sarcasm = SARCASM_INDICATORS.iter().any(|s| lower.contains(s));
    PhraseMatch { score, sarcasm }
}

/// Lowercase text with every crisis phrase blanked out.
///
/// Used by the context adjuster: the negation inside "no reason to live" is
/// part of the idiom, already priced into its valence, and must not flip
/// the sentence a second time.
pub fn mask_phrases(text: &str) -> String {
    let mut lower = text.to_lowercase();
    for (phrase, _) in CRISIS_PHRASES {
        if lower.contains(phrase) {
            lower = lower.replace(phrase, &" ".repeat(phrase.len()));
        }
    }
    lower
}
