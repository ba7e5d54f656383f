use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Response status outside the accepted 200..=300 range
    #[error("feed returned HTTP status {0}")]
    Status(u16),

    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed body is not a valid feature collection: {0}")]
    Json(#[from] serde_json::Error),
}
