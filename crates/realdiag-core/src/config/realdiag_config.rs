//! Top-level RealDiag configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{OutputConfig, OutputFormat, ScoringConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Environment variables consulted by [`RealdiagConfig::load`].
pub const ENV_VARS: [&str; 5] = [
    "REALDIAG_BASE_PROBABILITY",
    "REALDIAG_LR_EPSILON",
    "REALDIAG_POSTERIOR_CAP",
    "REALDIAG_OUTPUT_FORMAT",
    "REALDIAG_INCLUDE_TRACE",
];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`REALDIAG_*`)
/// 3. Project config (`realdiag.toml` in the config root)
/// 4. User config (`~/.realdiag/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RealdiagConfig {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_probability: Option<f64>,
    pub output_format: Option<OutputFormat>,
    pub include_trace: Option<bool>,
}

impl RealdiagConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_user_config(root, Self::user_config_path().as_deref(), cli_overrides)
    }

    /// Same as [`load`](Self::load) with an explicit user config path.
    /// `None` skips the user layer.
    pub fn load_with_user_config(
        root: &Path,
        user_config: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {
                        tracing::debug!(path = %user_config_path.display(), "merged user config");
                    }
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        // Unreadable user config is not fatal.
                        tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RealdiagConfig) -> Result<(), ConfigError> {
        let scoring = &config.scoring;

        if let Some(p) = scoring.base_probability {
            if !(p > 0.0 && p < 1.0) {
                return Err(validation("scoring.base_probability", "must be between 0.0 and 1.0 (exclusive)"));
            }
        }
        if let Some(eps) = scoring.lr_epsilon {
            if !eps.is_finite() || eps < 0.0 {
                return Err(validation("scoring.lr_epsilon", "must be a finite value >= 0.0"));
            }
        }
        if let Some(cap) = scoring.posterior_cap {
            if !(cap > 0.0 && cap <= 100.0) {
                return Err(validation("scoring.posterior_cap", "must be in (0, 100]"));
            }
        }
        if let Some(scale) = scoring.match_score_scale {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(validation("scoring.match_score_scale", "must be greater than 0"));
            }
        }
        if let Some(thresholds) = scoring.band_thresholds {
            if thresholds.iter().any(|t| !(0.0..=100.0).contains(t)) {
                return Err(validation("scoring.band_thresholds", "values must be between 0 and 100"));
            }
            if thresholds.windows(2).any(|w| w[0] <= w[1]) {
                return Err(validation("scoring.band_thresholds", "values must be strictly descending"));
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.realdiag/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RealdiagConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RealdiagConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut RealdiagConfig, other: &RealdiagConfig) {
        // Scoring
        if other.scoring.base_probability.is_some() {
            base.scoring.base_probability = other.scoring.base_probability;
        }
        if other.scoring.lr_epsilon.is_some() {
            base.scoring.lr_epsilon = other.scoring.lr_epsilon;
        }
        if other.scoring.posterior_cap.is_some() {
            base.scoring.posterior_cap = other.scoring.posterior_cap;
        }
        if other.scoring.match_score_scale.is_some() {
            base.scoring.match_score_scale = other.scoring.match_score_scale;
        }
        if other.scoring.band_thresholds.is_some() {
            base.scoring.band_thresholds = other.scoring.band_thresholds;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
        if other.output.include_trace.is_some() {
            base.output.include_trace = other.output.include_trace;
        }
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut RealdiagConfig) {
        if let Some(v) = env_parse::<f64>("REALDIAG_BASE_PROBABILITY") {
            config.scoring.base_probability = Some(v);
        }
        if let Some(v) = env_parse::<f64>("REALDIAG_LR_EPSILON") {
            config.scoring.lr_epsilon = Some(v);
        }
        if let Some(v) = env_parse::<f64>("REALDIAG_POSTERIOR_CAP") {
            config.scoring.posterior_cap = Some(v);
        }
        if let Some(v) = env_parse::<OutputFormat>("REALDIAG_OUTPUT_FORMAT") {
            config.output.format = Some(v);
        }
        if let Some(v) = env_parse::<bool>("REALDIAG_INCLUDE_TRACE") {
            config.output.include_trace = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut RealdiagConfig, cli: &CliOverrides) {
        if let Some(v) = cli.base_probability {
            config.scoring.base_probability = Some(v);
        }
        if let Some(v) = cli.output_format {
            config.output.format = Some(v);
        }
        if let Some(v) = cli.include_trace {
            config.output.include_trace = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.parse::<T>().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
