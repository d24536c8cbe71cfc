//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use std::sync::Arc;

use async_trait::async_trait;
use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};

use huginn::analyzer::estimators::PolarityEstimator;
use huginn::cache::Layer;
use huginn::types::{AnalysisResult, EmotionPrediction, SentimentLabel, Tone};
use huginn::{
    CacheConfig, Calibrator, EmotionClassifier, Engine, Huginn, HuginnError, Post, PostAnalyzer,
    Result, telemetry,
};

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum all counter values matching a given metric name.
fn counter_total(snapshot: &SnapshotVec, name: &str) -> u64 {
    counter_with_label(snapshot, name, None)
}

/// Sum counter values matching a name and, optionally, one label pair.
fn counter_with_label(snapshot: &SnapshotVec, name: &str, label: Option<(&str, &str)>) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .filter(|(key, _, _, _)| match label {
            Some((k, v)) => key.key().labels().any(|l| l.key() == k && l.value() == v),
            None => true,
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Check if any histogram entries exist for a given metric name.
fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

struct NotANumber;

impl PolarityEstimator for NotANumber {
    fn name(&self) -> &str {
        "nan"
    }

    fn estimate(&self, _text: &str) -> Result<f64> {
        Ok(f64::NAN)
    }
}

struct FailingClassifier;

#[async_trait]
impl EmotionClassifier for FailingClassifier {
    fn name(&self) -> &str {
        "failing"
    }

    async fn classify(&self, _text: &str) -> Result<EmotionPrediction> {
        Err(HuginnError::Classifier("model offline".to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn successful_analysis_records_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        Engine::default().analyze("I finally feel better");
    });

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(
        counter_with_label(&snapshot, telemetry::ANALYSES_TOTAL, Some(("status", "ok"))),
        1
    );
    assert_eq!(
        counter_with_label(&snapshot, telemetry::ANALYSES_TOTAL, Some(("status", "fallback"))),
        0
    );
    assert!(has_histogram(&snapshot, telemetry::ANALYSIS_DURATION_SECONDS));
}

#[test]
fn failed_analysis_records_fallback() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let engine = Huginn::builder().estimator_a(NotANumber).build().unwrap();
    let result = metrics::with_local_recorder(&recorder, || engine.analyze("fine day"));
    assert!(result.is_neutral_default());

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(
        counter_with_label(&snapshot, telemetry::ANALYSES_TOTAL, Some(("status", "fallback"))),
        1
    );
}

#[test]
fn untokenizable_text_counts_skipped_components() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        Engine::default().analyze("I want to kill myself\u{0007}")
    });
    assert_eq!(result.label, SentimentLabel::Negative);

    let snapshot = snapshotter.snapshot().into_vec();
    let skipped = |stage: &str| {
        counter_with_label(&snapshot, telemetry::COMPONENT_FAILURES_TOTAL, Some(("stage", stage)))
    };
    assert_eq!(skipped("lexicon"), 1);
    assert_eq!(skipped("estimator b"), 1);
    assert_eq!(skipped("estimator a"), 0);
    assert_eq!(
        counter_with_label(&snapshot, telemetry::ANALYSES_TOTAL, Some(("status", "ok"))),
        1
    );
}

#[test]
fn calibrated_analysis_records_both_layers() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        Engine::default().analyze_calibrated("not a good day");
    });

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(
        counter_with_label(&snapshot, telemetry::ANALYSES_TOTAL, Some(("layer", "base"))),
        1
    );
    assert_eq!(
        counter_with_label(&snapshot, telemetry::ANALYSES_TOTAL, Some(("layer", "calibrated"))),
        1
    );
}

#[test]
fn skipped_sentence_counts_tokenization_failure() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let adjusted = metrics::with_local_recorder(&recorder, || {
        huginn::context::adjust("Fine today. Bad\u{0000}day.", 0.5)
    });
    assert!(adjusted.is_finite());

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(counter_total(&snapshot, telemetry::TOKENIZATION_FAILURES_TOTAL), 1);
}

#[test]
fn major_calibration_is_counted() {
    let base = AnalysisResult {
        polarity: 0.6,
        label: SentimentLabel::Positive,
        primary_tone: Tone::Hopeful,
        ..AnalysisResult::neutral()
    };

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    metrics::with_local_recorder(&recorder, || {
        // 0.6 -> -0.1
        Calibrator::new().calibrate("not today", &base);
        // same shift, under a threshold it does not exceed
        Calibrator::with_log_threshold(1.0).calibrate("not today", &base);
    });

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(counter_total(&snapshot, telemetry::MAJOR_CALIBRATIONS_TOTAL), 1);
}

#[test]
fn cache_hits_and_misses_are_labelled_by_layer() {
    let engine = Huginn::builder()
        .response_cache(CacheConfig::new())
        .build()
        .unwrap();

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    metrics::with_local_recorder(&recorder, || {
        engine.analyze("the same words");
        engine.analyze("the same words");
    });

    let snapshot = snapshotter.snapshot().into_vec();
    let base = Some(("layer", Layer::Base.as_str()));
    assert_eq!(counter_with_label(&snapshot, telemetry::CACHE_MISSES_TOTAL, base), 1);
    assert_eq!(counter_with_label(&snapshot, telemetry::CACHE_HITS_TOTAL, base), 1);
    // Only the miss ran the analyzer.
    assert_eq!(counter_total(&snapshot, telemetry::ANALYSES_TOTAL), 1);
}

/// Runs async code within a local recorder scope on the multi-thread runtime.
///
/// `block_in_place` ensures the sync `with_local_recorder` closure stays
/// on the current thread while `block_on` drives the inner async work.
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn classifier_failure_records_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let records = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                PostAnalyzer::new(Arc::new(Engine::default()))
                    .with_classifier(Arc::new(FailingClassifier))
                    .analyze_posts(vec![Post::new("one"), Post::new("two")])
                    .await
            })
        })
    });
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.emotion.is_none()));

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(
        counter_with_label(
            &snapshot,
            telemetry::CLASSIFIER_FAILURES_TOTAL,
            Some(("classifier", "failing"))
        ),
        2
    );
}
