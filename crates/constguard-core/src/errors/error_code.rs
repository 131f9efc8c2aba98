//! ConstguardErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so reporters can emit a structured
/// code next to the human-readable message.
pub trait ConstguardErrorCode {
    /// Returns the error code string (e.g., "VALUE_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
pub const VALUE_MISMATCH: &str = "VALUE_MISMATCH";
pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const USAGE_ERROR: &str = "USAGE_ERROR";
