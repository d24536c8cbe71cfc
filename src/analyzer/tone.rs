//! Rhetorical tone classification.
//!
//! Each catalogue tone scores one point per trigger keyword found in the
//! lowercased text (substring match). Polarity, emotion dimensions and a
//! handful of opener and idiom heuristics add fixed boosts on top. The
//! ranking is a stable descending sort, so ties resolve in catalogue order.

use crate::types::{EmotionDimensions, Tone};

const REFLECTIVE: &[&str] = &[
    "think", "realize", "understand", "learn", "know", "wonder", "remember", "reflect", "ponder",
    "contemplate", "realized", "teaching myself", "learning",
];

const MELANCHOLIC: &[&str] = &[
    "sad", "miss", "hurt", "pain", "tears", "cry", "lonely", "alone", "empty", "lost", "grief",
    "sorrow", "heartbreak", "hurts", "tired", "exhausted",
];

const FRUSTRATED: &[&str] = &[
    "sick of", "fed up", "annoyed", "irritated", "frustrating", "tired of", "can't stand",
    "hate when", "why do people", "wish people would",
];

const HOPEFUL: &[&str] = &[
    "hope", "better", "improve", "trying", "future", "progress", "believe", "faith", "strong",
    "will be", "eventually", "someday", "looking forward",
];

const RESIGNED: &[&str] = &[
    "whatever", "it is what it is", "can't change", "accept", "that's life", "that's how it is",
    "nothing i can do", "is what it is",
];

const ANGRY: &[&str] = &[
    "hate", "angry", "mad", "fury", "rage", "furious", "pissed", "fuck", "fucking", "bullshit",
    "stupid", "worst", "terrible", "awful",
];

const NOSTALGIC: &[&str] = &[
    "remember when", "back then", "used to", "those days", "memories", "miss those", "childhood",
    "back in the day", "good old days",
];

const GRATEFUL: &[&str] = &[
    "thank", "grateful", "blessed", "thankful", "appreciate", "lucky", "fortunate", "glad", "love",
];

const INSTRUCTIVE: &[&str] = &[
    "never", "always", "don't", "should", "must", "need to", "have to", "remember to", "forget",
    "learn to",
];

const SARCASTIC: &[&str] = &[
    "yeah right", "sure thing", "as if", "of course", "wow", "amazing", "fantastic", "right",
    "obviously",
];

const PAIN_WORDS: &[&str] = &["hurt", "hurts", "pain", "sad", "empty", "alone", "die", "kill myself"];

/// Trigger keywords for a catalogue tone. [`Tone::Neutral`] has none.
pub fn keywords(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Reflective => REFLECTIVE,
        Tone::Melancholic => MELANCHOLIC,
        Tone::Frustrated => FRUSTRATED,
        Tone::Hopeful => HOPEFUL,
        Tone::Resigned => RESIGNED,
        Tone::Angry => ANGRY,
        Tone::Nostalgic => NOSTALGIC,
        Tone::Grateful => GRATEFUL,
        Tone::Instructive => INSTRUCTIVE,
        Tone::Sarcastic => SARCASTIC,
        Tone::Neutral => &[],
    }
}

fn any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lower.contains(n))
}

fn starts_with_any(lower: &str, openers: &[&str]) -> bool {
    openers.iter().any(|o| lower.starts_with(o))
}

/// Raw per-tone scores in catalogue order.
pub fn tone_scores(text: &str, polarity: f64, dims: &EmotionDimensions) -> [(Tone, u32); 10] {
    let lower = text.to_lowercase().replace('\u{2019}', "'");
    let lower = lower.trim_start();
    let mut scores = Tone::CATEGORIES.map(|tone| {
        let hits = keywords(tone).iter().filter(|k| lower.contains(*k)).count();
        (tone, hits as u32)
    });
    let mut boost = |tone: Tone, by: u32| {
        if let Some(i) = tone.index() {
            scores[i].1 += by;
        }
    };

    if polarity < -0.25 {
        if any(lower, PAIN_WORDS) {
            boost(Tone::Melancholic, 2);
        }
        if any(lower, &["hate", "fuck"]) {
            boost(Tone::Angry, 2);
        }
        if any(lower, &["tired of", "sick of"]) {
            boost(Tone::Frustrated, 2);
        }
    }
    if polarity > 0.15 {
        boost(Tone::Hopeful, 1);
        boost(Tone::Grateful, 1);
    }

    if dims.distress > 0.2 {
        boost(Tone::Melancholic, 1);
        boost(Tone::Frustrated, 1);
    }
    if dims.anger > 0.2 {
        boost(Tone::Angry, 2);
    }
    if dims.resilience > 0.2 {
        boost(Tone::Hopeful, 2);
    }

    if starts_with_any(lower, &["i think", "i realized"]) {
        boost(Tone::Reflective, 1);
    }
    if starts_with_any(lower, &["i hate", "i can't stand"]) {
        boost(Tone::Frustrated, 1);
    }
    if lower.starts_with("thank") || lower.contains("grateful") {
        boost(Tone::Grateful, 1);
    }
    if any(lower, &["remember when", "used to"]) {
        boost(Tone::Nostalgic, 1);
    }
    if starts_with_any(lower, &["never ", "always "]) {
        boost(Tone::Instructive, 1);
    }
    let rhetorical = lower.contains('?') && any(lower, &["right", "really"]);
    if rhetorical || starts_with_any(lower, &["as if", "yeah right"]) {
        boost(Tone::Sarcastic, 2);
    }
    if any(lower, &["it is what it is", "that's life"]) {
        boost(Tone::Resigned, 2);
    }

    scores
}

/// Primary and secondary tone for a text.
///
/// Returns `(Tone::Neutral, None)` when no tone scored at all. The
/// secondary tone is present only when the runner-up scored above zero.
pub fn classify_tone(text: &str, polarity: f64, dims: &EmotionDimensions) -> (Tone, Option<Tone>) {
    let mut ranked = tone_scores(text, polarity, dims);
    // Stable: equal scores keep catalogue order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let (primary, top) = ranked[0];
    if top == 0 {
        return (Tone::Neutral, None);
    }
    let (runner_up, second) = ranked[1];
    (primary, (second > 0).then_some(runner_up))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_signal_is_neutral() {
        let (p, s) = classify_tone("the bus comes at noon", 0.0, &EmotionDimensions::zero());
        assert_eq!(p, Tone::Neutral);
        assert_eq!(s, None);
    }

    #[test]
    fn ties_resolve_in_catalogue_order() {
        let (p, s) = classify_tone("hope", 0.0, &EmotionDimensions::zero());
        assert_eq!((p, s), (Tone::Hopeful, None));

        let (p, s) = classify_tone("sad and mad", 0.0, &EmotionDimensions::zero());
        assert_eq!(p, Tone::Melancholic);
        assert_eq!(s, Some(Tone::Angry));
    }

    #[test]
    fn negative_polarity_boosts_melancholy() {
        let dims = EmotionDimensions {
            distress: 0.5,
            ..Default::default()
        };
        let (p, _) = classify_tone("everything hurts", -0.7, &dims);
        assert_eq!(p, Tone::Melancholic);
    }

    #[test]
    fn rhetorical_question_is_sarcastic() {
        let scores = tone_scores("Oh really?", 0.0, &EmotionDimensions::zero());
        assert_eq!(scores[Tone::Sarcastic.index().unwrap()].1, 2);
    }

    #[test]
    fn resignation_idiom_gets_bonus() {
        let scores = tone_scores("It is what it is", 0.0, &EmotionDimensions::zero());
        // two keywords plus the idiom bonus
        assert_eq!(scores[Tone::Resigned.index().unwrap()].1, 4);
    }

    #[test]
    fn secondary_absent_when_runner_up_is_zero() {
        let (p, s) = classify_tone("memories", 0.0, &EmotionDimensions::zero());
        assert_eq!(p, Tone::Nostalgic);
        assert_eq!(s, None);
    }
}
