//! Errors raised while reading diagnostic API payloads.

use super::error_code::{self, RealdiagErrorCode};

/// Errors from decoding the JSON the diagnostic API returns.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Failed to read payload from {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed diagnostic payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload contains no diagnostic results")]
    Empty,

    #[error("No diagnostic result labelled '{label}'")]
    UnknownLabel { label: String },
}

impl RealdiagErrorCode for PayloadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::PAYLOAD_IO,
            Self::Json(_) => error_code::PAYLOAD_INVALID,
            Self::Empty => error_code::PAYLOAD_EMPTY,
            Self::UnknownLabel { .. } => error_code::UNKNOWN_LABEL,
        }
    }
}
