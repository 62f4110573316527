use thiserror::Error;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unable to display current version: {0}")]
    MetadataUnavailable(DbError),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
