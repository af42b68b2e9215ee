use thiserror::Error;

/// Main error type for the aggregator
#[derive(Error, Debug)]
pub enum AggregatorError {
    /// A source adapter failed to search or fetch
    #[error("Source '{adapter}' error: {message}")]
    Source { adapter: String, message: String },

    /// A source adapter did not answer in time
    #[error("Source '{adapter}' timed out after {timeout_ms}ms")]
    SourceTimeout { adapter: String, timeout_ms: u64 },

    /// Platform name that no classifier entry recognises
    #[error("{0}")]
    UnknownPlatform(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid platform pattern
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl AggregatorError {
    /// Build a source error for the given adapter name
    pub fn adapter(adapter: impl Into<String>, message: impl Into<String>) -> Self {
        AggregatorError::Source {
            adapter: adapter.into(),
            message: message.into(),
        }
    }
}

impl From<String> for AggregatorError {
    fn from(s: String) -> Self {
        AggregatorError::Other(s)
    }
}

impl From<&str> for AggregatorError {
    fn from(s: &str) -> Self {
        AggregatorError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AggregatorError>;
