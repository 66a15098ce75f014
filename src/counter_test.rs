use super::*;

fn run(target: f64) -> Vec<f64> {
    CounterSteps::new(target, 40).collect()
}

// =============================================================
// parse_target
// =============================================================

#[test]
fn parse_target_accepts_plain_numbers() {
    assert_eq!(parse_target(Some("150")), Some(150.0));
    assert_eq!(parse_target(Some(" 98.5 ")), Some(98.5));
    assert_eq!(parse_target(Some("1e3")), Some(1000.0));
}

#[test]
fn parse_target_treats_missing_and_blank_as_zero() {
    assert_eq!(parse_target(None), Some(0.0));
    assert_eq!(parse_target(Some("")), Some(0.0));
    assert_eq!(parse_target(Some("   ")), Some(0.0));
}

#[test]
fn parse_target_rejects_garbage_and_infinities() {
    assert_eq!(parse_target(Some("12k")), None);
    assert_eq!(parse_target(Some("1,200")), None);
    assert_eq!(parse_target(Some("inf")), None);
    assert_eq!(parse_target(Some("NaN")), None);
}

// =============================================================
// format_value
// =============================================================

#[test]
fn format_value_drops_trailing_zero_fraction() {
    assert_eq!(format_value(150.0), "150");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(2.5), "2.5");
}

// =============================================================
// CounterSteps
// =============================================================

#[test]
fn steps_end_exactly_on_target() {
    for target in [1.0, 7.0, 40.0, 50.0, 100.0, 250.0, 12_000.0, 5.5] {
        let values = run(target);
        assert_eq!(values.last().copied(), Some(target), "target {target}");
    }
}

#[test]
fn steps_strictly_increase_and_never_exceed_target() {
    for target in [1.0, 3.0, 39.0, 41.0, 99.0, 100.0, 1234.0, 98.6] {
        let values = run(target);
        let mut prev = 0.0;
        for value in &values {
            assert!(*value > prev, "target {target}: {value} after {prev}");
            assert!(*value <= target, "target {target}: {value} overshoots");
            prev = *value;
        }
    }
}

#[test]
fn step_count_is_bounded_by_configured_steps() {
    for target in [1.0, 40.0, 100.0, 1_000_000.0] {
        assert!(run(target).len() <= 40, "target {target}");
    }
}

#[test]
fn large_targets_take_larger_strides() {
    let values = run(4000.0);
    assert_eq!(values.len(), 40);
    assert_eq!(values[0], 100.0);
    assert_eq!(values[1], 200.0);
}

#[test]
fn small_target_climbs_one_at_a_time() {
    assert_eq!(run(3.0), vec![1.0, 2.0, 3.0]);
}

#[test]
fn overshooting_stride_is_clamped() {
    // 100 / 40 = 2.5, so ceil walks 3, 6, ... 99 then would jump to 102.
    let values = run(100.0);
    assert_eq!(values[0], 3.0);
    assert_eq!(values[values.len() - 2], 99.0);
    assert_eq!(values[values.len() - 1], 100.0);
}

#[test]
fn zero_and_negative_targets_snap_immediately() {
    assert_eq!(run(0.0), vec![0.0]);
    assert_eq!(run(-5.0), vec![-5.0]);
}

#[test]
fn zero_configured_steps_behaves_like_one() {
    let values: Vec<f64> = CounterSteps::new(10.0, 0).collect();
    assert_eq!(values, vec![10.0]);
}

#[test]
fn iterator_is_fused_after_target() {
    let mut steps = CounterSteps::new(2.0, 40);
    assert_eq!(steps.next(), Some(1.0));
    assert_eq!(steps.next(), Some(2.0));
    assert_eq!(steps.next(), None);
    assert_eq!(steps.next(), None);
}

// =============================================================
// AnimationToken
// =============================================================

#[test]
fn ticket_is_current_until_superseded() {
    let token = AnimationToken::default();
    let first = token.begin();
    assert!(first.is_current());
    let second = token.begin();
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn cancel_invalidates_in_flight_ticket() {
    let token = AnimationToken::default();
    let ticket = token.begin();
    token.cancel();
    assert!(!ticket.is_current());
}

#[test]
fn cloned_token_shares_generation() {
    let token = AnimationToken::default();
    let ticket = token.begin();
    token.clone().cancel();
    assert!(!ticket.is_current());
}

#[test]
fn cloned_ticket_tracks_same_run() {
    let token = AnimationToken::default();
    let ticket = token.begin();
    let copy = ticket.clone();
    assert!(copy.is_current());
    let _next = token.begin();
    assert!(!copy.is_current());
}
