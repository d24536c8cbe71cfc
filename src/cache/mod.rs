//! Result caching.
//!
//! Analysis is a pure function of its input text and the engine's
//! configuration, so a cached result is indistinguishable from a fresh one.
//! The cache is opt-in: see [`HuginnBuilder::response_cache()`](crate::HuginnBuilder::response_cache).

pub mod result;

pub use result::{CacheConfig, ResultCache};

/// Which analysis layer produced a result.
///
/// Used as the cache namespace and as the `layer` metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Base,
    Calibrated,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Calibrated => "calibrated",
        }
    }
}
