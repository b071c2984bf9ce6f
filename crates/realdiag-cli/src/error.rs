//! CLI error type.

use realdiag_core::errors::error_code;
use realdiag_core::errors::{ConfigError, PayloadError, RealdiagErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl RealdiagErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Payload(e) => e.error_code(),
            Self::Output(_) => error_code::OUTPUT_ERROR,
        }
    }
}
