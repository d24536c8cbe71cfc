//! Builder for configuring engine instances

use super::Engine;
use crate::analyzer::estimators::{PatternEstimator, PolarityEstimator, VaderEstimator};
use crate::analyzer::{Analyzer, Weights};
use crate::cache::{CacheConfig, ResultCache};
use crate::calibration::{Calibrator, DEFAULT_LOG_THRESHOLD};
use crate::config::Config;
use crate::{HuginnError, Result};

/// Main entry point for creating engine instances.
pub struct Huginn;

impl Huginn {
    /// Create a new builder for configuring the engine.
    pub fn builder() -> HuginnBuilder {
        HuginnBuilder::new()
    }
}

/// Builder for configuring engine instances.
pub struct HuginnBuilder {
    weights: Weights,
    calibration_log_threshold: f64,
    response_cache: Option<CacheConfig>,
    estimator_a: Option<Box<dyn PolarityEstimator>>,
    estimator_b: Option<Box<dyn PolarityEstimator>>,
}

impl HuginnBuilder {
    pub fn new() -> Self {
        Self {
            weights: Weights::default(),
            calibration_log_threshold: DEFAULT_LOG_THRESHOLD,
            response_cache: None,
            estimator_a: None,
            estimator_b: None,
        }
    }

    /// Start from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            weights: config.weights,
            calibration_log_threshold: config.calibration.log_threshold,
            response_cache: config.cache.to_cache_config(),
            estimator_a: None,
            estimator_b: None,
        }
    }

    /// Override the blend weights.
    pub fn weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Polarity shift above which calibration adjustments are logged.
    pub fn calibration_log_threshold(mut self, threshold: f64) -> Self {
        self.calibration_log_threshold = threshold;
        self
    }

    /// Enable the result cache.
    ///
    /// Without this, no cache is allocated.
    pub fn response_cache(mut self, config: CacheConfig) -> Self {
        self.response_cache = Some(config);
        self
    }

    /// Replace the VADER estimator.
    pub fn estimator_a(mut self, estimator: impl PolarityEstimator + 'static) -> Self {
        self.estimator_a = Some(Box::new(estimator));
        self
    }

    /// Replace the pattern estimator.
    pub fn estimator_b(mut self, estimator: impl PolarityEstimator + 'static) -> Self {
        self.estimator_b = Some(Box::new(estimator));
        self
    }

    /// Build the engine.
    pub fn build(self) -> Result<Engine> {
        self.weights.validate()?;
        if !self.calibration_log_threshold.is_finite() || self.calibration_log_threshold < 0.0 {
            return Err(HuginnError::Configuration(format!(
                "invalid calibration log threshold: {}",
                self.calibration_log_threshold
            )));
        }

        let analyzer = Analyzer::with_estimators(
            self.estimator_a
                .unwrap_or_else(|| Box::new(VaderEstimator::new())),
            self.estimator_b
                .unwrap_or_else(|| Box::new(PatternEstimator::new())),
            self.weights,
        );

        Ok(Engine::new(
            analyzer,
            Calibrator::with_log_threshold(self.calibration_log_threshold),
            self.response_cache.as_ref().map(ResultCache::new),
        ))
    }
}

impl Default for HuginnBuilder {
    fn default() -> Self {
        Self::new()
    }
}
