//! Public types for the Huginn API.

mod dimensions;
mod emotion;
mod label;
mod result;
mod tone;

pub use dimensions::EmotionDimensions;
pub use emotion::{EMOTION_LABELS, EmotionPrediction, HIGH_SEVERITY_LABELS, Severity};
pub use label::{
    BASE_NEGATIVE_THRESHOLD, CALIBRATED_NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, SentimentLabel,
};
pub use result::AnalysisResult;
pub(crate) use result::round2;
pub use tone::Tone;
