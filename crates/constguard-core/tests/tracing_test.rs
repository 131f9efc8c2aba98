//! Tests for the constguard tracing setup.
//!
//! All tests share one process-wide subscriber; whichever runs first
//! installs it.

use std::sync::Mutex;

use constguard_core::tracing::init_tracing;
use tracing::level_filters::LevelFilter;

/// Serializes tests that touch `CONSTGUARD_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_installs_global_subscriber() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
    assert_ne!(LevelFilter::current(), LevelFilter::OFF);
}

#[test]
fn test_constguard_log_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("CONSTGUARD_LOG", "constguard_analysis=debug,constguard_core=warn");
    init_tracing();
    tracing::debug!("tracing initialized");
    std::env::remove_var("CONSTGUARD_LOG");
    assert!(tracing::dispatcher::has_been_set());
}

#[test]
fn test_second_init_keeps_first_subscriber() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    let before = LevelFilter::current();

    // A later call must not pick up the new filter.
    std::env::set_var("CONSTGUARD_LOG", "trace");
    init_tracing();
    std::env::remove_var("CONSTGUARD_LOG");

    assert_eq!(LevelFilter::current(), before);
    assert_ne!(LevelFilter::current(), LevelFilter::TRACE);
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("CONSTGUARD_LOG", "=[not a filter");
    init_tracing();
    std::env::remove_var("CONSTGUARD_LOG");
    assert!(tracing::dispatcher::has_been_set());
}
