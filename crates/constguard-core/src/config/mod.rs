//! Configuration system for constguard.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod check_config;
pub mod constguard_config;
pub mod report_config;

pub use check_config::CheckConfig;
pub use constguard_config::{CliOverrides, ConstguardConfig};
pub use report_config::{ReportConfig, ReportFormat};
