//! Rhetorical tone categories.
//!
//! Tone describes *how* text is expressed, independently of its polarity.
//! The catalogue is closed: ten categories plus [`Tone::Neutral`], which the
//! classifier emits only when no category received any signal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HuginnError;

/// A rhetorical tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Reflective,
    Melancholic,
    Frustrated,
    Hopeful,
    Resigned,
    Angry,
    Nostalgic,
    Grateful,
    Instructive,
    Sarcastic,
    /// No tone signal at all. Never part of the ranked catalogue.
    Neutral,
}

impl Tone {
    /// The ranked catalogue, in tie-break order.
    pub const CATEGORIES: [Tone; 10] = [
        Tone::Reflective,
        Tone::Melancholic,
        Tone::Frustrated,
        Tone::Hopeful,
        Tone::Resigned,
        Tone::Angry,
        Tone::Nostalgic,
        Tone::Grateful,
        Tone::Instructive,
        Tone::Sarcastic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Reflective => "reflective",
            Tone::Melancholic => "melancholic",
            Tone::Frustrated => "frustrated",
            Tone::Hopeful => "hopeful",
            Tone::Resigned => "resigned",
            Tone::Angry => "angry",
            Tone::Nostalgic => "nostalgic",
            Tone::Grateful => "grateful",
            Tone::Instructive => "instructive",
            Tone::Sarcastic => "sarcastic",
            Tone::Neutral => "neutral",
        }
    }

    /// Index into [`Tone::CATEGORIES`]; `None` for [`Tone::Neutral`].
    pub(crate) fn index(&self) -> Option<usize> {
        Self::CATEGORIES.iter().position(|t| t == self)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = HuginnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::CATEGORIES
            .iter()
            .chain(std::iter::once(&Tone::Neutral))
            .find(|t| t.as_str() == lower)
            .copied()
            .ok_or_else(|| HuginnError::InvalidInput(format!("unknown tone: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_is_not_a_category() {
        assert!(!Tone::CATEGORIES.contains(&Tone::Neutral));
        assert_eq!(Tone::Neutral.index(), None);
        assert_eq!(Tone::Sarcastic.index(), Some(9));
    }

    #[test]
    fn parse_round_trips_names() {
        for tone in Tone::CATEGORIES {
            assert_eq!(tone.as_str().parse::<Tone>().unwrap(), tone);
        }
        assert_eq!("Neutral".parse::<Tone>().unwrap(), Tone::Neutral);
        assert!("cheerful".parse::<Tone>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Tone::Melancholic).unwrap();
        assert_eq!(json, "\"melancholic\"");
    }
}
