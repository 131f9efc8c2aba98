//! EventDispatcher: synchronous event dispatch, free when empty.

use std::sync::Arc;

use super::handler::ConstguardEventHandler;
use super::types::*;

/// Synchronous dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ConstguardEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn ConstguardEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop the others.
    fn emit<F: Fn(&dyn ConstguardEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_check_started(&self, event: &CheckStartedEvent) {
        self.emit(|h| h.on_check_started(event));
    }

    pub fn emit_artifact_loaded(&self, event: &ArtifactLoadedEvent) {
        self.emit(|h| h.on_artifact_loaded(event));
    }

    pub fn emit_class_checked(&self, event: &ClassCheckedEvent) {
        self.emit(|h| h.on_class_checked(event));
    }

    pub fn emit_field_passed(&self, event: &FieldPassedEvent) {
        self.emit(|h| h.on_field_passed(event));
    }

    pub fn emit_rule_skipped(&self, event: &RuleSkippedEvent) {
        self.emit(|h| h.on_rule_skipped(event));
    }

    pub fn emit_violation(&self, event: &ViolationEvent) {
        self.emit(|h| h.on_violation(event));
    }

    pub fn emit_check_complete(&self, event: &CheckCompleteEvent) {
        self.emit(|h| h.on_check_complete(event));
    }
}
