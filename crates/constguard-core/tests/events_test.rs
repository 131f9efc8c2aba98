//! Tests for the event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use constguard_core::events::types::*;
use constguard_core::events::{ConstguardEventHandler, EventDispatcher};
use constguard_core::types::TypedValue;

#[derive(Default)]
struct Counter {
    passes: AtomicUsize,
    completes: AtomicUsize,
}

impl ConstguardEventHandler for Counter {
    fn on_field_passed(&self, _event: &FieldPassedEvent) {
        self.passes.fetch_add(1, Ordering::SeqCst);
    }

    fn on_check_complete(&self, _event: &CheckCompleteEvent) {
        self.completes.fetch_add(1, Ordering::SeqCst);
    }
}

struct Panicker;

impl ConstguardEventHandler for Panicker {
    fn on_field_passed(&self, _event: &FieldPassedEvent) {
        panic!("handler bug");
    }
}

fn pass_event() -> FieldPassedEvent {
    FieldPassedEvent {
        class_name: "com.example.BuildConfig".into(),
        field: "DEBUG".into(),
        value: TypedValue::Bool(false),
        flavor: "prod".into(),
        build_type: "release".into(),
    }
}

#[test]
fn test_empty_dispatcher_is_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_field_passed(&pass_event());
}

#[test]
fn test_events_reach_every_handler() {
    let first = Arc::new(Counter::default());
    let second = Arc::new(Counter::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(first.clone());
    dispatcher.register(second.clone());

    dispatcher.emit_field_passed(&pass_event());
    dispatcher.emit_check_complete(&CheckCompleteEvent {
        classes_checked: 1,
        fields_checked: 1,
        fields_passed: 1,
        duration_ms: 0,
    });

    assert_eq!(first.passes.load(Ordering::SeqCst), 1);
    assert_eq!(second.passes.load(Ordering::SeqCst), 1);
    assert_eq!(second.completes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let counter = Arc::new(Counter::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Panicker));
    dispatcher.register(counter.clone());

    dispatcher.emit_field_passed(&pass_event());
    assert_eq!(counter.passes.load(Ordering::SeqCst), 1);
}
