//! Huginn - heuristic sentiment, emotion-dimension and tone engine
//!
//! Huginn scores short social-media texts for mental-health-related
//! emotional signals. It blends two general-purpose polarity estimators
//! with a domain lexicon and crisis-phrase table, corrects the blend for
//! negation, intensifiers and sarcasm, derives five emotion dimensions and
//! a rhetorical tone, then re-checks the result in a calibration layer.
//!
//! Outputs are advisory signals for downstream aggregation, not clinical
//! assessments.
//!
//! # Quick start
//!
//! ```rust
//! use huginn::SentimentLabel;
//!
//! let result = huginn::analyze_calibrated("I am so happy and grateful today");
//! assert_eq!(result.label, SentimentLabel::Positive);
//! ```
//!
//! # Configured engine
//!
//! ```rust
//! use huginn::{CacheConfig, Huginn};
//!
//! # fn main() -> huginn::Result<()> {
//! let engine = Huginn::builder()
//!     .calibration_log_threshold(0.3)
//!     .response_cache(CacheConfig::new().max_entries(1_000))
//!     .build()?;
//!
//! let result = engine.analyze("I want to die and nobody cares");
//! assert!(result.polarity < 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Batches
//!
//! [`PostAnalyzer`] runs posts through the calibrated engine and an
//! external [`EmotionClassifier`], and [`Summary`] aggregates the records.

pub mod analyzer;
pub mod cache;
pub mod calibration;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod preprocess;
pub mod report;
pub mod telemetry;
pub mod tokenize;
pub mod types;
pub mod version;

pub use analyzer::{context, phrases, tone};

// Re-export main types at crate root
pub use analyzer::{Analyzer, Weights};
pub use cache::{CacheConfig, ResultCache};
pub use calibration::Calibrator;
pub use classifier::EmotionClassifier;
pub use config::Config;
pub use engine::{Engine, Huginn, HuginnBuilder, analyze, analyze_calibrated};
pub use error::{HuginnError, Result};
pub use pipeline::{PipelineConfig, Post, PostAnalyzer, PostRecord};
pub use report::{Assessment, AssessmentConfig, Summary};
pub use version::PKG_VERSION;

pub use types::{
    AnalysisResult, EmotionDimensions, EmotionPrediction, Severity, SentimentLabel, Tone,
};
