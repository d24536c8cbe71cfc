//! Configured analysis engine.
//!
//! [`Engine`] bundles the base [`Analyzer`], the [`Calibrator`] and an
//! optional [`ResultCache`]. It is `Send + Sync`; share it behind an `Arc`.
//! The free functions [`analyze`] and [`analyze_calibrated`] run on a
//! process-wide engine with default settings.

mod builder;

use std::sync::LazyLock;
use std::time::Instant;

use tracing::warn;

pub use builder::{Huginn, HuginnBuilder};

use crate::analyzer::Analyzer;
use crate::cache::{Layer, ResultCache};
use crate::calibration::Calibrator;
use crate::types::AnalysisResult;
use crate::{Result, telemetry};

static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::default);

/// Base analysis on the process-wide default engine.
///
/// Never fails: errors produce [`AnalysisResult::neutral`].
pub fn analyze(text: &str) -> AnalysisResult {
    DEFAULT_ENGINE.analyze(text)
}

/// Calibrated analysis on the process-wide default engine.
pub fn analyze_calibrated(text: &str) -> AnalysisResult {
    DEFAULT_ENGINE.analyze_calibrated(text)
}

/// Sentiment engine: base analyzer, calibration layer and optional cache.
#[derive(Debug)]
pub struct Engine {
    analyzer: Analyzer,
    calibrator: Calibrator,
    cache: Option<ResultCache>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Analyzer::default(), Calibrator::default(), None)
    }
}

impl Engine {
    pub(crate) fn new(
        analyzer: Analyzer,
        calibrator: Calibrator,
        cache: Option<ResultCache>,
    ) -> Self {
        Self {
            analyzer,
            calibrator,
            cache,
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn calibrator(&self) -> &Calibrator {
        &self.calibrator
    }

    pub fn cache(&self) -> Option<&ResultCache> {
        self.cache.as_ref()
    }

    /// Base analysis, surfacing failures instead of falling back.
    ///
    /// Successful results are cached; errors are not.
    pub fn try_analyze(&self, text: &str) -> Result<AnalysisResult> {
        if let Some(hit) = self.cached(Layer::Base, text) {
            return Ok(hit);
        }
        let start = Instant::now();
        let result = self.analyzer.try_analyze(text);
        record_analysis(Layer::Base, start, result.is_ok());
        let result = result?;
        self.store(Layer::Base, text, &result);
        Ok(result)
    }

    /// Base analysis. Failures produce the neutral result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.try_analyze(text).unwrap_or_else(|e| {
            warn!(error = %e, "analysis failed, returning neutral result");
            AnalysisResult::neutral()
        })
    }

    /// Base analysis followed by the calibration layer.
    pub fn analyze_calibrated(&self, text: &str) -> AnalysisResult {
        if let Some(hit) = self.cached(Layer::Calibrated, text) {
            return hit;
        }
        let base = self.analyze(text);
        let start = Instant::now();
        let result = self.calibrator.calibrate(text, &base);
        record_analysis(Layer::Calibrated, start, true);
        self.store(Layer::Calibrated, text, &result);
        result
    }

    fn cached(&self, layer: Layer, text: &str) -> Option<AnalysisResult> {
        self.cache.as_ref()?.get(layer, text)
    }

    fn store(&self, layer: Layer, text: &str, result: &AnalysisResult) {
        if let Some(cache) = &self.cache {
            cache.insert(layer, text, result.clone());
        }
    }
}

/// Record analysis outcome metrics (counter + histogram).
fn record_analysis(layer: Layer, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "fallback" };
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(telemetry::ANALYSES_TOTAL,
        "layer" => layer.as_str(),
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::ANALYSIS_DURATION_SECONDS,
        "layer" => layer.as_str(),
    )
    .record(elapsed);
}
