//! Snapshot loading errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot has no root element")]
    EmptyDocument,

    #[error("Invalid node at {path}: {message}")]
    InvalidNode { path: String, message: String },

    #[error("No element with id \"{0}\"")]
    UnknownNode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
