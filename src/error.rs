use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropwiseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Opaque failure surfaced by the recommendation engine. The underlying
    /// cause is logged, never returned.
    #[error("Failed to generate prediction")]
    PredictionFailed,
}

pub type Result<T> = std::result::Result<T, CropwiseError>;
