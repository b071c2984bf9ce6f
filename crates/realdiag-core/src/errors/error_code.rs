//! RealdiagErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so callers (the CLI, log pipelines)
/// get a structured code alongside the human-readable message.
pub trait RealdiagErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PAYLOAD_IO: &str = "PAYLOAD_IO";
pub const PAYLOAD_INVALID: &str = "PAYLOAD_INVALID";
pub const PAYLOAD_EMPTY: &str = "PAYLOAD_EMPTY";
pub const UNKNOWN_LABEL: &str = "UNKNOWN_LABEL";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
