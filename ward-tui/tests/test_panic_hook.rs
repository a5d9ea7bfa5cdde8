//! Test the terminal-restoring panic hook
//!
//! The hook is process-wide, so everything runs in a single test.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use libwardview::{EventBus, Topic};
use ward_tui::terminal::install_panic_hook_with;

#[test]
fn test_restore_skips_isolated_handler_panics() {
    let restores = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&restores);
    install_panic_hook_with(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // A crashing panel handler is isolated by the bus
    let bus = EventBus::new();
    let _bad = bus.subscribe(Topic::ShowAiAgent, |_| panic!("panel crashed"));
    let report = bus.publish(Topic::ShowAiAgent);

    assert_eq!(report.failed, 1);
    assert_eq!(restores.load(Ordering::SeqCst), 0);

    // A panic that really unwinds the loop restores the terminal
    let outcome = std::panic::catch_unwind(|| panic!("event loop crashed"));

    assert!(outcome.is_err());
    assert_eq!(restores.load(Ordering::SeqCst), 1);

    let _ = std::panic::take_hook();
}
