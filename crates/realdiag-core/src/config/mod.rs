//! Configuration system for RealDiag.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod output_config;
pub mod realdiag_config;
pub mod scoring_config;

pub use output_config::{OutputConfig, OutputFormat};
pub use realdiag_config::{CliOverrides, RealdiagConfig};
pub use scoring_config::ScoringConfig;
