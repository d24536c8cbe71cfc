//! Classifier input preprocessing.
//!
//! The categorical classifier was trained on plain ASCII words, so its
//! input is stripped of URLs, emoji and every non-letter character before
//! prediction. The sentiment engine itself always sees the raw text.

use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").expect("valid URL pattern"));

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}]")
        .expect("valid emoji pattern")
});

static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid letter pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Strip URLs, emoji and non-letters, then collapse whitespace.
///
/// Case is preserved.
pub fn clean_text(text: &str) -> String {
    let text = URL.replace_all(text, "");
    let text = EMOJI.replace_all(&text, "");
    let text = NON_LETTER.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
