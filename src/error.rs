//! Bodega error types

/// Bodega error types
#[derive(Debug, thiserror::Error)]
pub enum BodegaError {
    // Durable-storage errors
    #[error("storage error: {0}")]
    Storage(String),

    // Remote catalog errors
    #[error("catalog fetch failed: {0}")]
    Fetch(String),

    #[error("catalog fetch returned HTTP {status}")]
    FetchStatus { status: u16 },

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for BodegaError {
    fn from(err: reqwest::Error) -> Self {
        BodegaError::Fetch(err.to_string())
    }
}

/// Result type alias for Bodega operations
pub type Result<T> = std::result::Result<T, BodegaError>;
