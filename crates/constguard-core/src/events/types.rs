//! Event payload types emitted during a check run.

use std::path::PathBuf;

use crate::errors::EnforcementError;
use crate::types::TypedValue;

/// Payload for `on_check_started`.
#[derive(Debug, Clone)]
pub struct CheckStartedEvent {
    pub flavor: String,
    pub build_type: String,
    pub artifacts: Vec<PathBuf>,
}

/// Payload for `on_artifact_loaded`.
#[derive(Debug, Clone)]
pub struct ArtifactLoadedEvent {
    pub artifact: PathBuf,
    pub observations: usize,
}

/// Payload for `on_class_checked`. Emitted once per distinct class.
#[derive(Debug, Clone)]
pub struct ClassCheckedEvent {
    pub class_name: String,
    pub field_count: usize,
}

/// Payload for `on_field_passed`.
#[derive(Debug, Clone)]
pub struct FieldPassedEvent {
    pub class_name: String,
    pub field: String,
    pub value: TypedValue,
    pub flavor: String,
    pub build_type: String,
}

/// Payload for `on_rule_skipped`: the rule does not apply to the active variant.
#[derive(Debug, Clone)]
pub struct RuleSkippedEvent {
    pub class_name: String,
    pub field: String,
    pub rule_flavor: Option<String>,
    pub rule_build_type: Option<String>,
}

/// Payload for `on_violation`.
#[derive(Debug, Clone)]
pub struct ViolationEvent {
    pub error: EnforcementError,
}

/// Payload for `on_check_complete`.
#[derive(Debug, Clone)]
pub struct CheckCompleteEvent {
    pub classes_checked: usize,
    pub fields_checked: usize,
    pub fields_passed: usize,
    pub duration_ms: u64,
}
