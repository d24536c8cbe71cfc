//! Calibration layer behaviour.

use huginn::calibration::{WordCounts, count_words, recalibrate};
use huginn::types::{
    AnalysisResult, BASE_NEGATIVE_THRESHOLD, CALIBRATED_NEGATIVE_THRESHOLD, EmotionDimensions,
    SentimentLabel, Tone,
};
use huginn::{Calibrator, Engine};

fn base(polarity: f64, tone: Tone) -> AnalysisResult {
    AnalysisResult {
        polarity,
        label: SentimentLabel::base(polarity),
        confidence: 0.8,
        dimensions: EmotionDimensions {
            distress: 0.3,
            resilience: 0.4,
            ..Default::default()
        },
        primary_tone: tone,
        secondary_tone: Some(Tone::Grateful),
    }
}

#[test]
fn layers_disagree_between_thresholds() {
    assert!(CALIBRATED_NEGATIVE_THRESHOLD > BASE_NEGATIVE_THRESHOLD);
    assert_eq!(SentimentLabel::base(-0.12), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::calibrated(-0.12), SentimentLabel::Negative);

    // No calibration words: polarity passes through, only the label moves.
    let r = Calibrator::new().calibrate("ok", &base(-0.12, Tone::Neutral));
    assert_eq!(r.polarity, -0.12);
    assert_eq!(r.label, SentimentLabel::Negative);
}

#[test]
fn only_polarity_and_label_change() {
    let input = base(0.5, Tone::Hopeful);
    let r = Calibrator::new().calibrate("this is not good", &input);

    assert_eq!(r.polarity, -0.1);
    assert_eq!(r.label, SentimentLabel::Neutral);
    assert_eq!(r.confidence, input.confidence);
    assert_eq!(r.dimensions, input.dimensions);
    assert_eq!(r.primary_tone, input.primary_tone);
    assert_eq!(r.secondary_tone, input.secondary_tone);
}

#[test]
fn positive_words_soften_negative_polarity() {
    let counts = count_words("great wonderful amazing day");
    assert_eq!(counts.positive, 3);
    // 1 - 0.15 * 3
    assert_eq!(recalibrate(-0.4, counts, Tone::Angry), -0.22);
}

#[test]
fn tone_consistency_rules() {
    let none = WordCounts::default();
    assert_eq!(recalibrate(0.5, none, Tone::Neutral), 0.35);
    assert_eq!(recalibrate(0.5, none, Tone::Reflective), 0.35);
    assert_eq!(recalibrate(0.4, none, Tone::Angry), 0.2);
    assert_eq!(recalibrate(-0.4, none, Tone::Grateful), -0.2);
    assert_eq!(recalibrate(0.4, none, Tone::Hopeful), 0.4);
}

#[test]
fn calibrated_output_stays_in_range() {
    let engine = Engine::default();
    for text in [
        "not not not never no nothing",
        "I'm not sad, I'm not tired, I'm not lonely",
        "great great great great great",
    ] {
        let r = engine.analyze_calibrated(text);
        assert!((-1.0..=1.0).contains(&r.polarity), "{text}: {}", r.polarity);
        assert_eq!(r.label, SentimentLabel::calibrated(r.polarity));
    }
}

#[test]
fn calibration_is_deterministic() {
    let engine = Engine::default();
    let text = "I can't believe how good this feels";
    assert_eq!(engine.analyze_calibrated(text), engine.analyze_calibrated(text));
}
