//! Core types, errors, config, tracing, and constants for RealDiag.
//!
//! Everything the likelihood engine and the CLI share lives here: the
//! `DiagnosticResult` contract returned by the diagnostic API, the layered
//! scoring configuration, and one error enum per subsystem.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::RealdiagConfig;
pub use errors::{ConfigError, PayloadError, RealdiagErrorCode};
pub use types::{DiagnosticResult, SearchResponse};
