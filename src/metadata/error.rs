/// Errors that can occur during file metadata processing
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Date or time field could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
