//! Report output configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format of the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Configuration for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// "text" | "json". Kept as a string so a bad value is a validation error
    /// with a field name rather than an opaque TOML error.
    pub format: Option<String>,
    /// Print one line per passing field. Default: true.
    pub show_passes: Option<bool>,
}

impl ReportConfig {
    /// Returns the effective format, falling back to text when unset or invalid.
    pub fn effective_format(&self) -> ReportFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    /// Returns whether passing fields are listed, defaulting to true.
    pub fn effective_show_passes(&self) -> bool {
        self.show_passes.unwrap_or(true)
    }
}
