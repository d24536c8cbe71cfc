//! Telemetry metric name constants.
//!
//! Centralised metric names for huginn operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `huginn_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `layer`: "base" or "calibrated"
//! - `status`: outcome: "ok" or "fallback"
//! - `classifier`: name of the external emotion classifier
//! - `stage`: analyzer component ("context", "lexicon", "pattern", ...)

/// Total analyses performed.
///
/// Labels: `layer`, `status` ("ok" | "fallback").
pub const ANALYSES_TOTAL: &str = "huginn_analyses_total";

/// Analysis duration in seconds (cache misses only).
///
/// Labels: `layer`.
pub const ANALYSIS_DURATION_SECONDS: &str = "huginn_analysis_duration_seconds";

/// Sentences skipped because they failed to tokenize.
///
/// Labels: `stage` ("context" | "lexicon" | "pattern").
pub const TOKENIZATION_FAILURES_TOTAL: &str = "huginn_tokenization_failures_total";

/// Analyzer components that failed to tokenize and scored zero.
///
/// Labels: `stage`.
pub const COMPONENT_FAILURES_TOTAL: &str = "huginn_component_failures_total";

/// Calibrations that moved polarity by more than the logging threshold.
pub const MAJOR_CALIBRATIONS_TOTAL: &str = "huginn_major_calibrations_total";

/// Total result cache hits.
///
/// Labels: `layer`.
pub const CACHE_HITS_TOTAL: &str = "huginn_cache_hits_total";

/// Total result cache misses.
///
/// Labels: `layer`.
pub const CACHE_MISSES_TOTAL: &str = "huginn_cache_misses_total";

/// Emotion classifier calls that failed and left a post without a prediction.
///
/// Labels: `classifier`.
pub const CLASSIFIER_FAILURES_TOTAL: &str = "huginn_classifier_failures_total";
