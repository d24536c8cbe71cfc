//! Sentence splitting and word tokenization.
//!
//! Every scorer in the engine tokenizes through this module so that the
//! lexicon average, the context adjuster and the estimators agree on what a
//! "word" is. Words are case-folded runs of alphanumerics; inner apostrophes
//! and hyphens are kept (`don't`, `self-harm`), everything else separates.
//!
//! Tokenization is the one place the engine rejects input. A text fails to
//! tokenize when it contains control characters, an implausibly long token,
//! or a pile of stacked combining marks. Callers decide whether that failure
//! skips a sentence or aborts the whole analysis.

use tracing::debug;

use crate::{HuginnError, Result, telemetry};

/// Longest token accepted, in characters.
pub const MAX_TOKEN_CHARS: usize = 256;

/// Most consecutive combining marks accepted on one base character.
pub const MAX_COMBINING_RUN: usize = 8;

/// Split text into sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` followed by whitespace (or
/// end of text), or at a line break. Returned slices are trimmed and never
/// empty.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let boundary = match c {
            '\n' | '\r' => Some(i + c.len_utf8()),
            '.' | '!' | '?' => {
                // Swallow the whole terminator run ("?!", "...").
                let mut end = i + c.len_utf8();
                while let Some(&(j, next)) = chars.peek() {
                    if matches!(next, '.' | '!' | '?') {
                        end = j + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                match chars.peek() {
                    None => Some(end),
                    Some(&(_, next)) if next.is_whitespace() => Some(end),
                    _ => None,
                }
            }
            _ => None,
        };

        if let Some(end) = boundary {
            push_trimmed(&mut out, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut out, &text[start..]);
    out
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, s: &'a str) {
    let s = s.trim();
    if !s.is_empty() {
        out.push(s);
    }
}

/// Split text into case-folded words.
///
/// Fails with [`HuginnError::Tokenization`] on malformed input; see the
/// module docs for what counts as malformed.
pub fn words(text: &str) -> Result<Vec<String>> {
    validate(text)?;

    let mut out = Vec::new();
    for piece in text.split(|c: char| !is_word_char(c)) {
        let piece = piece.trim_matches(|c| matches!(c, '\'' | '\u{2019}' | '-'));
        if piece.is_empty() {
            continue;
        }
        if piece.chars().count() > MAX_TOKEN_CHARS {
            return Err(HuginnError::tokenization(format!(
                "token exceeds {MAX_TOKEN_CHARS} characters"
            )));
        }
        out.push(piece.to_lowercase().replace('\u{2019}', "'"));
    }
    Ok(out)
}

/// Words of every sentence that tokenizes.
///
/// Sentences that fail are skipped, logged and counted under `stage`. The
/// call fails only when text has sentences and none of them tokenize.
pub fn words_by_sentence(text: &str, stage: &'static str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    let mut tokenized = false;
    let mut last_error = None;
    for sentence in sentences(text) {
        match words(sentence) {
            Ok(words) => {
                tokenized = true;
                out.extend(words);
            }
            Err(e) => {
                debug!(stage, error = %e, "skipping sentence");
                metrics::counter!(telemetry::TOKENIZATION_FAILURES_TOTAL, "stage" => stage)
                    .increment(1);
                last_error = Some(e);
            }
        }
    }
    match last_error {
        Some(e) if !tokenized => Err(e),
        _ => Ok(out),
    }
}

fn validate(text: &str) -> Result<()> {
    let mut combining_run = 0;
    for c in text.chars() {
        if c.is_control() && !c.is_whitespace() {
            return Err(HuginnError::tokenization(format!(
                "control character U+{:04X}",
                c as u32
            )));
        }
        if is_combining_mark(c) {
            combining_run += 1;
            if combining_run > MAX_COMBINING_RUN {
                return Err(HuginnError::tokenization(
                    "too many stacked combining marks",
                ));
            }
        } else {
            combining_run = 0;
        }
    }
    Ok(())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\'' | '\u{2019}' | '-') || is_combining_mark(c)
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32,
        0x0300..=0x036F
        | 0x1AB0..=0x1AFF
        | 0x1DC0..=0x1DFF
        | 0x20D0..=0x20FF
        | 0xFE20..=0xFE2F)
}
