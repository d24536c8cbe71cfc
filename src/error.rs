//! Huginn error types

/// Huginn error types
#[derive(Debug, thiserror::Error)]
pub enum HuginnError {
    // Analysis errors
    /// A sentence or text could not be split into words.
    ///
    /// Recovered per sentence by the context adjuster; at the analyzer
    /// boundary it turns into the neutral fallback result.
    #[error("tokenization failed: {reason}")]
    Tokenization { reason: String },

    #[error("non-finite score in {stage}")]
    NonFinite { stage: &'static str },

    // Collaborator errors
    #[error("emotion classifier error: {0}")]
    Classifier(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl HuginnError {
    pub(crate) fn tokenization(reason: impl Into<String>) -> Self {
        HuginnError::Tokenization {
            reason: reason.into(),
        }
    }

    /// Whether the error is absorbed by the analyzer's neutral fallback.
    ///
    /// Analysis-stage errors are; configuration, I/O and collaborator
    /// errors are surfaced to the caller.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(
            self,
            HuginnError::Tokenization { .. } | HuginnError::NonFinite { .. }
        )
    }
}

/// Result type alias for Huginn operations
pub type Result<T> = std::result::Result<T, HuginnError>;
