//! ConstguardEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a check run.
///
/// Handlers override only the events they care about. `Send + Sync` so a
/// handler can be shared behind an `Arc`.
pub trait ConstguardEventHandler: Send + Sync {
    fn on_check_started(&self, _event: &CheckStartedEvent) {}
    fn on_artifact_loaded(&self, _event: &ArtifactLoadedEvent) {}
    fn on_class_checked(&self, _event: &ClassCheckedEvent) {}
    fn on_field_passed(&self, _event: &FieldPassedEvent) {}
    fn on_rule_skipped(&self, _event: &RuleSkippedEvent) {}
    fn on_violation(&self, _event: &ViolationEvent) {}
    fn on_check_complete(&self, _event: &CheckCompleteEvent) {}
}
