//! Configuration loading.
//!
//! Configuration is loaded from TOML with the following resolution order:
//! 1. explicit path (`hgn --config <path>`)
//! 2. `~/.huginn/config.toml` (user)
//! 3. `/etc/huginn/config.toml` (system)
//!
//! Without any file the built-in defaults apply. Every key is optional.
//!
//! ```toml
//! [weights]
//! estimator_a = 0.3
//! estimator_b = 0.2
//! lexicon = 0.4
//! phrase = 0.1
//!
//! [calibration]
//! log_threshold = 0.2
//!
//! [cache]
//! enabled = true
//! max_entries = 10000
//! ttl_secs = 3600
//!
//! [assessment]
//! direct_share = 50.0
//!
//! [pipeline]
//! max_concurrent = 8
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::analyzer::Weights;
use crate::cache::CacheConfig;
use crate::calibration::DEFAULT_LOG_THRESHOLD;
use crate::pipeline::PipelineConfig;
use crate::report::AssessmentConfig;
use crate::{HuginnError, Result};

/// Engine and pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub cache: CacheSection,
    #[serde(default)]
    pub assessment: AssessmentConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Calibration layer settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalibrationConfig {
    /// Polarity shift above which an adjustment is logged (default: 0.2).
    #[serde(default = "default_log_threshold")]
    pub log_threshold: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            log_threshold: default_log_threshold(),
        }
    }
}

fn default_log_threshold() -> f64 {
    DEFAULT_LOG_THRESHOLD
}

/// Result cache settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CacheSection {
    /// Whether to allocate a result cache (default: false).
    #[serde(default)]
    pub enabled: bool,
    /// Maximum cached entries (default: 10,000).
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
    /// Entry time-to-live in seconds (default: 3600).
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            enabled: false,
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_max_entries() -> u64 {
    10_000
}

fn default_ttl_secs() -> u64 {
    3600
}

impl CacheSection {
    /// Runtime cache configuration, or `None` when caching is disabled.
    pub fn to_cache_config(&self) -> Option<CacheConfig> {
        self.enabled.then(|| {
            CacheConfig::new()
                .max_entries(self.max_entries)
                .ttl(Duration::from_secs(self.ttl_secs))
        })
    }
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the user and system
    /// locations are tried, then the defaults are used.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| HuginnError::Configuration(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            HuginnError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            HuginnError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })?;
        config.validate()?;
        debug!(path = ?path, "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if !self.calibration.log_threshold.is_finite() || self.calibration.log_threshold < 0.0 {
            return Err(HuginnError::Configuration(
                "calibration.log_threshold must be a non-negative number".to_string(),
            ));
        }
        if self.pipeline.max_concurrent == 0 {
            return Err(HuginnError::Configuration(
                "pipeline.max_concurrent must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(HuginnError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".huginn").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/huginn/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
