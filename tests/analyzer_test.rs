//! End-to-end behaviour of the base analyzer and the default engine.

use huginn::analyzer::estimators::PolarityEstimator;
use huginn::{
    AnalysisResult, EmotionDimensions, Engine, Huginn, HuginnError, SentimentLabel, Tone,
};

const HAPPY: &str = "I am so happy and grateful today";
const CRISIS: &str = "I want to kill myself, there is no reason to live";

struct NotANumber;

impl PolarityEstimator for NotANumber {
    fn name(&self) -> &str {
        "nan"
    }

    fn estimate(&self, _text: &str) -> huginn::Result<f64> {
        Ok(f64::NAN)
    }
}

fn assert_in_range(r: &AnalysisResult) {
    assert!((-1.0..=1.0).contains(&r.polarity), "polarity {}", r.polarity);
    assert!((0.0..=1.0).contains(&r.confidence), "confidence {}", r.confidence);
    assert!(r.dimensions.in_range(), "dimensions {:?}", r.dimensions);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn happy_and_grateful_is_positive() {
    let r = huginn::analyze(HAPPY);
    assert_eq!(r.label, SentimentLabel::Positive);
    assert!(r.dimensions.resilience > 0.0);

    let top_two = [Some(r.primary_tone), r.secondary_tone];
    assert!(
        top_two.contains(&Some(Tone::Grateful)) || top_two.contains(&Some(Tone::Hopeful)),
        "tones {top_two:?}"
    );
}

#[test]
fn crisis_language_is_negative() {
    let r = huginn::analyze(CRISIS);
    assert_eq!(r.label, SentimentLabel::Negative);
    assert!(r.dimensions.hopelessness > 0.0);
    assert!(r.dimensions.distress > 0.0);
    assert!(
        matches!(r.primary_tone, Tone::Melancholic | Tone::Resigned),
        "primary {:?}",
        r.primary_tone
    );
}

#[test]
fn empty_text_is_neutral_default() {
    let r = huginn::analyze("");
    assert_eq!(r.polarity, 0.0);
    assert_eq!(r.label, SentimentLabel::Neutral);
    assert_eq!(r.confidence, 0.0);
    assert_eq!(r.dimensions, EmotionDimensions::zero());
    assert_eq!(r.primary_tone, Tone::Neutral);
    assert_eq!(r.secondary_tone, None);
}

#[test]
fn negation_turns_positive_negative() {
    let plain = huginn::analyze("I am happy");
    let negated = huginn::analyze("I am not happy");
    assert!(plain.polarity > 0.0);
    assert!(negated.polarity < 0.0);
}

#[test]
fn sarcasm_flips_praise() {
    let r = huginn::analyze("Oh great, yeah right, another wonderful Monday");
    assert!(r.polarity < 0.0, "polarity {}", r.polarity);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn analysis_is_deterministic() {
    let engine = Engine::default();
    for text in [HAPPY, CRISIS, "meh", "Why do people always do this?"] {
        assert_eq!(engine.analyze(text), engine.analyze(text));
    }
}

#[test]
fn outputs_stay_in_range() {
    let texts = [
        HAPPY,
        CRISIS,
        "very very very extremely utterly happy happy joy love",
        "hate hate hate kill myself want to die better off dead end it all",
        "so so so so so",
        "?!?!",
        "It is what it is. I used to think things would get better.",
    ];
    for text in texts {
        assert_in_range(&huginn::analyze(text));
        assert_in_range(&huginn::analyze_calibrated(text));
    }
}

#[test]
fn base_label_matches_thresholds() {
    for text in [HAPPY, CRISIS, "the bus is late", "I am not happy", "ok"] {
        let r = huginn::analyze(text);
        let expected = if r.polarity > 0.15 {
            SentimentLabel::Positive
        } else if r.polarity < -0.15 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        assert_eq!(r.label, expected, "text {text:?}");
    }
}

#[test]
fn no_signal_text_has_neutral_tone() {
    let r = huginn::analyze("The bus comes at noon");
    assert_eq!(r.primary_tone, Tone::Neutral);
    assert_eq!(r.secondary_tone, None);
}

// ============================================================================
// Failure policy
// ============================================================================

#[test]
fn crisis_survives_an_oversized_token() {
    let text = format!("{CRISIS} {}", "A".repeat(300));
    let r = Engine::default().try_analyze(&text).unwrap();
    assert_eq!(r.label, SentimentLabel::Negative, "polarity {}", r.polarity);
}

#[test]
fn crisis_survives_a_control_character() {
    let r = Engine::default().try_analyze("I want to kill myself\u{0007}").unwrap();
    assert_eq!(r.label, SentimentLabel::Negative, "polarity {}", r.polarity);
    assert_in_range(&r);
}

#[test]
fn non_finite_component_falls_back_to_neutral() {
    let engine = Huginn::builder().estimator_b(NotANumber).build().unwrap();

    let err = engine.try_analyze("fine day").unwrap_err();
    assert!(matches!(err, HuginnError::NonFinite { .. }));
    assert!(err.is_analysis_failure());

    assert!(engine.analyze("fine day").is_neutral_default());
}

#[test]
fn pathological_unicode_returns_complete_result() {
    let zalgo: String = "help"
        .chars()
        .flat_map(|c| std::iter::once(c).chain(std::iter::repeat_n('\u{0336}', 20)))
        .collect();
    let r = huginn::analyze(&zalgo);
    assert_in_range(&r);
    assert_eq!(r.label, SentimentLabel::Neutral);
    assert_in_range(&huginn::analyze_calibrated(&zalgo));

    let huge_token = "a".repeat(10_000);
    let r = huginn::analyze(&huge_token);
    assert_in_range(&r);
    assert_eq!(r.label, SentimentLabel::Neutral);
}

#[test]
fn emoji_and_mixed_scripts_are_analysed() {
    let r = huginn::analyze("Feeling blessed 🙏 merci beaucoup, danke");
    assert_in_range(&r);
    assert!(!r.is_neutral_default());
}
