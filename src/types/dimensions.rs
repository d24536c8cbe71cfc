//! Emotion dimension vector.

use serde::{Deserialize, Serialize};

/// Five independent emotional signals, each in `[0, 1]`.
///
/// The values do not form a distribution and need not sum to one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionDimensions {
    pub distress: f64,
    pub hopelessness: f64,
    pub anxiety: f64,
    pub anger: f64,
    pub resilience: f64,
}

impl EmotionDimensions {
    /// All-zero dimensions.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Values in declaration order, paired with their names.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("distress", self.distress),
            ("hopelessness", self.hopelessness),
            ("anxiety", self.anxiety),
            ("anger", self.anger),
            ("resilience", self.resilience),
        ]
        .into_iter()
    }

    /// Whether every dimension lies in `[0, 1]`.
    pub fn in_range(&self) -> bool {
        self.iter().all(|(_, v)| (0.0..=1.0).contains(&v))
    }

    /// Component-wise mean over a set of dimension vectors.
    ///
    /// Returns all zeros for an empty set.
    pub fn mean<'a>(items: impl IntoIterator<Item = &'a EmotionDimensions>) -> Self {
        let mut sum = Self::zero();
        let mut n = 0usize;
        for d in items {
            sum.distress += d.distress;
            sum.hopelessness += d.hopelessness;
            sum.anxiety += d.anxiety;
            sum.anger += d.anger;
            sum.resilience += d.resilience;
            n += 1;
        }
        if n == 0 {
            return sum;
        }
        let n = n as f64;
        Self {
            distress: sum.distress / n,
            hopelessness: sum.hopelessness / n,
            anxiety: sum.anxiety / n,
            anger: sum.anger / n,
            resilience: sum.resilience / n,
        }
    }
}
