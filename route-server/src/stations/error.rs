//! Station store error types.

use std::path::PathBuf;

use crate::domain::StationId;

/// Errors that can occur when loading station records.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Station file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Station file is not a valid JSON array of station records
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share an id
    #[error("duplicate station id: {0}")]
    DuplicateId(StationId),
}
