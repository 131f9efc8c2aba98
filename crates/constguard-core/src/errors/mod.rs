//! Error handling for constguard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod enforcement_error;
pub mod error_code;
pub mod provider_error;
pub mod run_error;

pub use config_error::ConfigError;
pub use enforcement_error::EnforcementError;
pub use error_code::ConstguardErrorCode;
pub use provider_error::ProviderError;
pub use run_error::RunError;
