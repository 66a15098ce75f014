use super::*;

const THRESHOLD: f64 = 100.0;

#[test]
fn scrolling_down_past_threshold_hides() {
    let mut nav = NavbarTracker::new(90.0);
    assert!(nav.on_scroll(150.0, THRESHOLD));
}

#[test]
fn scrolling_down_below_threshold_stays_visible() {
    let mut nav = NavbarTracker::new(0.0);
    assert!(!nav.on_scroll(60.0, THRESHOLD));
    assert!(!nav.on_scroll(100.0, THRESHOLD));
}

#[test]
fn offset_equal_to_threshold_is_not_past_it() {
    let mut nav = NavbarTracker::new(99.0);
    assert!(!nav.on_scroll(100.0, THRESHOLD));
    assert!(nav.on_scroll(100.5, THRESHOLD));
}

#[test]
fn scrolling_up_reveals() {
    let mut nav = NavbarTracker::new(0.0);
    assert!(nav.on_scroll(500.0, THRESHOLD));
    assert!(!nav.on_scroll(480.0, THRESHOLD));
}

#[test]
fn no_movement_reveals() {
    let mut nav = NavbarTracker::new(500.0);
    assert!(!nav.on_scroll(500.0, THRESHOLD));
}

#[test]
fn last_offset_updates_unconditionally() {
    let mut nav = NavbarTracker::new(0.0);
    nav.on_scroll(40.0, THRESHOLD);
    assert_eq!(nav.last_scroll_y(), 40.0);
    nav.on_scroll(300.0, THRESHOLD);
    assert_eq!(nav.last_scroll_y(), 300.0);
    nav.on_scroll(10.0, THRESHOLD);
    assert_eq!(nav.last_scroll_y(), 10.0);
}

#[test]
fn hidden_iff_positive_delta_and_past_threshold() {
    let offsets = [0.0, 50.0, 120.0, 119.0, 400.0, 400.0, 90.0, 101.0, 2000.0, 5.0];
    let mut nav = NavbarTracker::new(0.0);
    let mut prev = 0.0;
    for y in offsets {
        let hidden = nav.on_scroll(y, THRESHOLD);
        assert_eq!(hidden, y > prev && y > THRESHOLD, "offset {y} after {prev}");
        prev = y;
    }
}
