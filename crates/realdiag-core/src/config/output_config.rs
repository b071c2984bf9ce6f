//! Report output configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How the CLI renders ranked outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: "output.format".to_string(),
                message: format!("unknown format '{other}', expected 'table' or 'json'"),
            }),
        }
    }
}

/// Configuration for report rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format. Default: table.
    pub format: Option<OutputFormat>,
    /// Print the reasoning trace under each outcome. Default: true.
    pub include_trace: Option<bool>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_include_trace(&self) -> bool {
        self.include_trace.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" table ".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
    }

    #[test]
    fn test_unknown_format_is_invalid_value() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
