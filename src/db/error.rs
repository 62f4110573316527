use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to create database directory: {0}")]
    Io(#[from] std::io::Error),

    /// The metadata record is missing or holds zero bytes
    #[error("unexpected end of JSON input")]
    UnexpectedEndOfInput,

    #[error("Invalid metadata: {0}")]
    Json(#[from] serde_json::Error),
}
