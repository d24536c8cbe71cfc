//! Seam for the external categorical emotion classifier.
//!
//! The engine never predicts categorical labels itself. Callers plug in
//! whatever model they run (a local network, a remote service) by
//! implementing [`EmotionClassifier`]; the [`PostAnalyzer`](crate::PostAnalyzer)
//! merges its predictions with the engine's calibrated output.

use async_trait::async_trait;

use crate::Result;
use crate::types::EmotionPrediction;

/// Classifier producing one emotion label with a confidence per text.
///
/// Receives text already passed through [`clean_text`](crate::preprocess::clean_text).
/// Errors should be [`HuginnError::Classifier`](crate::HuginnError::Classifier).
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classifier name for logging and metrics.
    fn name(&self) -> &str;

    /// Predict the most likely emotion label.
    async fn classify(&self, text: &str) -> Result<EmotionPrediction>;
}
