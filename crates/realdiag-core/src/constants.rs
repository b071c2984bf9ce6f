//! Shared constants for the RealDiag likelihood engine.

/// RealDiag version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Scoring ----

/// Fixed prior probability (10% prevalence assumption).
pub const DEFAULT_BASE_PROBABILITY: f64 = 0.1;

/// Added to `1 - specificity` so a specificity of 1.0 never divides by zero.
pub const DEFAULT_LR_EPSILON: f64 = 0.001;

/// Upper bound on the posterior percentage. The engine never reports certainty.
pub const DEFAULT_POSTERIOR_CAP: f64 = 99.0;

/// Divisor that maps the rule engine's 0-10 match score onto a ratio.
pub const DEFAULT_MATCH_SCORE_SCALE: f64 = 10.0;

/// Lower bounds (inclusive) of the Very High, High, Moderate, and Low bands.
pub const DEFAULT_BAND_THRESHOLDS: [f64; 4] = [80.0, 60.0, 40.0, 20.0];

// ---- Palette ----

pub const COLOR_UNKNOWN: &str = "#9ca3af";
pub const COLOR_VERY_HIGH: &str = "#10b981";
pub const COLOR_HIGH: &str = "#34d399";
pub const COLOR_MODERATE: &str = "#fbbf24";
pub const COLOR_LOW: &str = "#fb923c";
pub const COLOR_VERY_LOW: &str = "#ef4444";

// ---- Config files ----

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "realdiag.toml";

/// Directory under `$HOME` holding the user config.
pub const USER_CONFIG_DIR: &str = ".realdiag";
