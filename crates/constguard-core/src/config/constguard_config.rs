//! Top-level constguard configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CheckConfig, ReportConfig, ReportFormat};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::{ConfigError, RunError};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CONSTGUARD_*`)
/// 3. Project config (`constguard.toml` in the project root, or `--config`)
/// 4. User config (`~/.constguard/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConstguardConfig {
    pub check: CheckConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub flavor: Option<String>,
    pub build_type: Option<String>,
    pub annotation_package: Option<String>,
    pub report_format: Option<ReportFormat>,
    pub show_passes: Option<bool>,
}

impl ConstguardConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit` replaces the project config lookup; unlike the implicit
    /// `constguard.toml`, it must exist.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // User config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Project config
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConstguardConfig) -> Result<(), ConfigError> {
        if let Some(ref flavor) = config.check.flavor {
            if flavor.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "check.flavor".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref build_type) = config.check.build_type {
            if build_type.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "check.build_type".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref package) = config.check.annotation_package {
            if !is_java_package(package) {
                return Err(ConfigError::ValidationFailed {
                    field: "check.annotation_package".to_string(),
                    message: format!("'{package}' is not a dotted Java package name"),
                });
            }
        }
        if let Some(ref format) = config.report.format {
            if let Err(message) = format.parse::<ReportFormat>() {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message,
                });
            }
        }
        Ok(())
    }

    /// Returns the `(flavor, build_type)` pair under check.
    ///
    /// Both axes must be set by some layer; a missing one is a usage error,
    /// raised before any class is processed.
    pub fn active_variant(&self) -> Result<(&str, &str), RunError> {
        match (
            self.check.flavor.as_deref(),
            self.check.build_type.as_deref(),
        ) {
            (Some(flavor), Some(build_type)) => Ok((flavor, build_type)),
            (None, _) => Err(RunError::Usage(
                "no flavor given (use --flavor or check.flavor)".to_string(),
            )),
            (_, None) => Err(RunError::Usage(
                "no build type given (use --build-type or check.build_type)".to_string(),
            )),
        }
    }

    /// Returns the user config path: `~/.constguard/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ConstguardConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ConstguardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ConstguardConfig, other: &ConstguardConfig) {
        if other.check.flavor.is_some() {
            base.check.flavor = other.check.flavor.clone();
        }
        if other.check.build_type.is_some() {
            base.check.build_type = other.check.build_type.clone();
        }
        if other.check.annotation_package.is_some() {
            base.check.annotation_package = other.check.annotation_package.clone();
        }

        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.show_passes.is_some() {
            base.report.show_passes = other.report.show_passes;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut ConstguardConfig) {
        if let Ok(val) = std::env::var("CONSTGUARD_FLAVOR") {
            config.check.flavor = Some(val);
        }
        if let Ok(val) = std::env::var("CONSTGUARD_BUILD_TYPE") {
            config.check.build_type = Some(val);
        }
        if let Ok(val) = std::env::var("CONSTGUARD_ANNOTATION_PACKAGE") {
            config.check.annotation_package = Some(val);
        }
        if let Ok(val) = std::env::var("CONSTGUARD_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ConstguardConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.flavor {
            config.check.flavor = Some(v.clone());
        }
        if let Some(ref v) = cli.build_type {
            config.check.build_type = Some(v.clone());
        }
        if let Some(ref v) = cli.annotation_package {
            config.check.annotation_package = Some(v.clone());
        }
        if let Some(v) = cli.report_format {
            config.report.format = Some(v.to_string());
        }
        if let Some(v) = cli.show_passes {
            config.report.show_passes = Some(v);
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

fn is_java_package(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

/// Returns the user-level config directory: `~/.constguard/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".constguard"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
