//! Top-level run errors and their process exit codes.

use super::error_code::{self, ConstguardErrorCode};
use super::{ConfigError, EnforcementError, ProviderError};
use crate::constants::{EXIT_ENFORCEMENT_FAILED, EXIT_MALFORMED_INPUT, EXIT_USAGE};

/// Errors that end a run. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Config check failed: {0}")]
    Enforcement(#[from] EnforcementError),

    #[error("Malformed input: {0}")]
    MalformedInput(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Usage error: {0}")]
    Usage(String),
}

impl RunError {
    /// Exit code that lets callers tell "bad input" apart from "check failed".
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Enforcement(_) => EXIT_ENFORCEMENT_FAILED,
            Self::Usage(_) => EXIT_USAGE,
            Self::MalformedInput(_) | Self::Config(_) => EXIT_MALFORMED_INPUT,
        }
    }
}

impl ConstguardErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Enforcement(e) => e.error_code(),
            Self::MalformedInput(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Usage(_) => error_code::USAGE_ERROR,
        }
    }
}
