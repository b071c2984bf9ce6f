//! Error handling for RealDiag.
//! One error enum per subsystem, `thiserror` only.
//!
//! The likelihood engine itself never fails; errors only arise at the
//! boundaries where configuration and API payloads are read.

pub mod config_error;
pub mod error_code;
pub mod payload_error;

pub use config_error::ConfigError;
pub use error_code::RealdiagErrorCode;
pub use payload_error::PayloadError;
