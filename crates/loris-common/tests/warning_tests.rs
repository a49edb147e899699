//! Integration tests for the recovery warning system.
//!
//! Tests share the process-wide warning set, so only one test clears it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use loris_common::warning::{clear_warnings, warn_once};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts every event that reaches the subscriber.
#[derive(Default)]
struct EventCounter {
    events: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
        let _ = self.events.fetch_add(1, Ordering::SeqCst);
    }
}

/// Run `f` with a counting subscriber and return how many events it emitted.
fn count_warnings(f: impl FnOnce()) -> usize {
    let counter = EventCounter::default();
    let events = Arc::clone(&counter.events);
    let subscriber = tracing_subscriber::registry().with(counter);
    tracing::subscriber::with_default(subscriber, f);
    events.load(Ordering::SeqCst)
}

#[test]
fn test_warn_once_deduplicates_until_cleared() {
    let emitted = count_warnings(|| {
        warn_once("Test", "duplicate message");
        warn_once("Test", "duplicate message");
    });
    assert_eq!(emitted, 1);

    clear_warnings();
    assert_eq!(count_warnings(|| warn_once("Test", "duplicate message")), 1);
}

#[test]
fn test_same_message_different_component() {
    let emitted = count_warnings(|| {
        warn_once("Alpha", "shared text");
        warn_once("Beta", "shared text");
    });
    assert_eq!(emitted, 2);
}
