//! Batch analysis of social-media posts.
//!
//! Every post goes through the calibrated engine and, when one is attached,
//! the external emotion classifier. Classifier calls run concurrently up to
//! a configured bound; results come back in input order. A classifier
//! failure on one post leaves that post without a prediction and never
//! aborts the batch.

use std::sync::Arc;

use futures_util::{StreamExt, stream};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::classifier::EmotionClassifier;
use crate::engine::Engine;
use crate::preprocess::clean_text;
use crate::{HuginnError, Result, telemetry};
use crate::types::{AnalysisResult, EmotionPrediction, Severity};

/// Pipeline settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineConfig {
    /// Maximum classifier calls in flight (default: 8).
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
        }
    }
}

fn default_max_concurrent() -> usize {
    8
}

/// One input post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "post")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Post {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Parse posts from a JSON array or from JSON lines.
    pub fn parse_many(input: &str) -> Result<Vec<Post>> {
        let trimmed = input.trim_start();
        if trimmed.starts_with('[') {
            return Ok(serde_json::from_str(trimmed)?);
        }
        trimmed
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str::<Post>(line).map_err(HuginnError::from))
            .collect()
    }
}

/// Merged per-post output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Classifier input derived from `text`.
    pub cleaned: String,
    /// Absent when no classifier is attached or the classifier failed.
    pub emotion: Option<EmotionPrediction>,
    pub severity: Option<Severity>,
    /// Calibrated sentiment analysis of the raw text.
    pub analysis: AnalysisResult,
}

/// Runs posts through the engine and an optional emotion classifier.
pub struct PostAnalyzer {
    engine: Arc<Engine>,
    classifier: Option<Arc<dyn EmotionClassifier>>,
    max_concurrent: usize,
}

impl PostAnalyzer {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self {
            engine,
            classifier: None,
            max_concurrent: default_max_concurrent(),
        }
    }

    /// Attach the external emotion classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn EmotionClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Bound on concurrent classifier calls. Values below 1 are raised to 1.
    pub fn max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n.max(1);
        self
    }

    pub fn with_config(self, config: &PipelineConfig) -> Self {
        self.max_concurrent(config.max_concurrent)
    }

    /// Analyze a batch of posts, preserving input order.
    #[instrument(skip(self, posts), fields(posts = posts.len(), max_concurrent = self.max_concurrent))]
    pub async fn analyze_posts(&self, posts: Vec<Post>) -> Vec<PostRecord> {
        stream::iter(posts)
            .map(|post| self.analyze_post(post))
            .buffered(self.max_concurrent)
            .collect()
            .await
    }

    /// Analyze a single post.
    pub async fn analyze_post(&self, post: Post) -> PostRecord {
        let cleaned = clean_text(&post.text);
        let emotion = match &self.classifier {
            Some(classifier) => predict(classifier.as_ref(), &cleaned).await,
            None => None,
        };
        let analysis = self.engine.analyze_calibrated(&post.text);

        PostRecord {
            severity: emotion.as_ref().map(EmotionPrediction::severity),
            text: post.text,
            date: post.date,
            cleaned,
            emotion,
            analysis,
        }
    }
}

async fn predict(classifier: &dyn EmotionClassifier, text: &str) -> Option<EmotionPrediction> {
    match classifier.classify(text).await {
        Ok(prediction) => Some(prediction),
        Err(e) => {
            warn!(classifier = classifier.name(), error = %e, "emotion classification failed");
            metrics::counter!(telemetry::CLASSIFIER_FAILURES_TOTAL,
                "classifier" => classifier.name().to_owned(),
            )
            .increment(1);
            None
        }
    }
}
