//! Emotion dimensions derived from final polarity and keyword triggers.

use crate::types::EmotionDimensions;

const ANXIETY_KEYWORDS: &[&str] = &["anxious", "anxiety", "panic", "worried", "nervous"];

const ANGER_KEYWORDS: &[&str] = &["angry", "mad", "hate", "fury", "furious", "rage", "pissed"];

// Stems: "improv" covers improve/improving/improvement.
const RESILIENCE_KEYWORDS: &[&str] = &[
    "trying", "hope", "better", "improv", "progress", "recover", "healing", "strong", "grateful",
    "thankful",
];

fn mentions(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Compute the five dimensions for already-lowercased text.
pub fn emotion_dimensions(lower: &str, polarity: f64) -> EmotionDimensions {
    let negative = |scale: f64| (-polarity * scale).clamp(0.0, 1.0);

    EmotionDimensions {
        distress: negative(0.7),
        hopelessness: if polarity < -0.3 { negative(0.8) } else { 0.0 },
        anxiety: if mentions(lower, ANXIETY_KEYWORDS) {
            negative(0.6)
        } else {
            0.0
        },
        anger: if mentions(lower, ANGER_KEYWORDS) {
            negative(0.5)
        } else {
            0.0
        },
        resilience: if polarity > 0.0 && mentions(lower, RESILIENCE_KEYWORDS) {
            (polarity * 0.9).clamp(0.0, 1.0)
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_polarity_has_no_distress() {
        let d = emotion_dimensions("trying my best", 0.5);
        assert_eq!(d.distress, 0.0);
        assert_eq!(d.hopelessness, 0.0);
        assert!((d.resilience - 0.45).abs() < 1e-9);
    }

    #[test]
    fn hopelessness_needs_strong_negativity() {
        assert_eq!(emotion_dimensions("meh", -0.3).hopelessness, 0.0);
        assert!((emotion_dimensions("meh", -0.5).hopelessness - 0.4).abs() < 1e-9);
    }

    #[test]
    fn keyword_gated_dimensions() {
        let plain = emotion_dimensions("bad day", -1.0);
        assert_eq!(plain.anxiety, 0.0);
        assert_eq!(plain.anger, 0.0);

        let keyed = emotion_dimensions("so anxious and i hate it", -1.0);
        assert!((keyed.anxiety - 0.6).abs() < 1e-9);
        assert!((keyed.anger - 0.5).abs() < 1e-9);
        assert!((keyed.distress - 0.7).abs() < 1e-9);
    }

    #[test]
    fn all_in_range_at_extremes() {
        for p in [-1.0, 0.0, 1.0] {
            assert!(emotion_dimensions("hate anxious hope", p).in_range());
        }
    }
}
