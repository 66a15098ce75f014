use super::*;

fn plain(i: usize) -> VisibilityEvent {
    VisibilityEvent { id: RevealId(i), is_metrics: false }
}

fn metrics(i: usize) -> VisibilityEvent {
    VisibilityEvent { id: RevealId(i), is_metrics: true }
}

// =============================================================
// Activation
// =============================================================

#[test]
fn first_visibility_activates() {
    let mut tracker = RevealTracker::default();
    let outcome = tracker.on_visible(plain(0));
    assert!(outcome.activate);
    assert!(!outcome.start_counters);
    assert!(tracker.is_activated(RevealId(0)));
}

#[test]
fn repeat_visibility_is_ignored() {
    let mut tracker = RevealTracker::default();
    tracker.on_visible(plain(3));
    for _ in 0..5 {
        assert_eq!(tracker.on_visible(plain(3)), RevealOutcome::default());
    }
}

#[test]
fn elements_activate_independently() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.on_visible(plain(0)).activate);
    assert!(tracker.on_visible(plain(1)).activate);
    assert!(!tracker.on_visible(plain(0)).activate);
    assert!(tracker.on_visible(plain(2)).activate);
    assert!(!tracker.is_activated(RevealId(9)));
}

// =============================================================
// Counter latch
// =============================================================

#[test]
fn metrics_visibility_starts_counters_once() {
    let mut tracker = RevealTracker::default();
    assert!(!tracker.counters_started());
    let outcome = tracker.on_visible(metrics(4));
    assert!(outcome.activate);
    assert!(outcome.start_counters);
    assert!(tracker.counters_started());
    assert!(!tracker.on_visible(metrics(4)).start_counters);
}

#[test]
fn second_metrics_element_does_not_restart_counters() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.on_visible(metrics(1)).start_counters);
    let outcome = tracker.on_visible(metrics(2));
    assert!(outcome.activate);
    assert!(!outcome.start_counters);
}

#[test]
fn counters_start_exactly_once_across_many_events() {
    let mut tracker = RevealTracker::default();
    let events = [plain(0), metrics(5), plain(1), metrics(5), metrics(6), plain(0), metrics(5)];
    let starts = events.iter().filter(|e| tracker.on_visible(**e).start_counters).count();
    assert_eq!(starts, 1);
}

#[test]
fn plain_elements_never_start_counters() {
    let mut tracker = RevealTracker::default();
    for i in 0..10 {
        assert!(!tracker.on_visible(plain(i)).start_counters);
    }
    assert!(!tracker.counters_started());
}
