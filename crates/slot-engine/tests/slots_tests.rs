//! Tests for start-time candidate generation.

use chrono::NaiveTime;
use slot_engine::slots::{generate_candidates, OpenWindow};
use slot_engine::SlotError;

fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn window(open: NaiveTime, close: NaiveTime) -> OpenWindow {
    OpenWindow { open, close }
}

#[test]
fn nine_to_six_at_thirty_minutes_gives_eighteen_candidates() {
    let candidates = generate_candidates(&window(t(9, 0), t(18, 0)), 30).unwrap();

    assert_eq!(candidates.len(), 18);
    assert_eq!(candidates.first(), Some(&t(9, 0)));
    assert_eq!(candidates.last(), Some(&t(17, 30)));
}

#[test]
fn last_candidate_must_fit_a_whole_step() {
    // 09:00-10:45 at 30 min: 10:30 would end at 11:00, past closing.
    let candidates = generate_candidates(&window(t(9, 0), t(10, 45)), 30).unwrap();

    assert_eq!(candidates, vec![t(9, 0), t(9, 30), t(10, 0)]);
}

#[test]
fn step_equal_to_window_gives_single_candidate() {
    let candidates = generate_candidates(&window(t(9, 0), t(9, 30)), 30).unwrap();
    assert_eq!(candidates, vec![t(9, 0)]);
}

#[test]
fn inverted_window_is_empty_not_an_error() {
    let candidates = generate_candidates(&window(t(18, 0), t(9, 0)), 30).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn zero_length_window_is_empty() {
    let candidates = generate_candidates(&window(t(9, 0), t(9, 0)), 30).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn zero_step_is_rejected() {
    let result = generate_candidates(&window(t(9, 0), t(18, 0)), 0);
    assert!(matches!(result, Err(SlotError::InvalidStep(_))));
}

#[test]
fn custom_step_is_honoured() {
    let candidates = generate_candidates(&window(t(9, 0), t(10, 0)), 15).unwrap();
    assert_eq!(candidates, vec![t(9, 0), t(9, 15), t(9, 30), t(9, 45)]);
}

#[test]
fn step_longer_than_a_day_is_rejected() {
    let nine_to_six = window(t(9, 0), t(18, 0));
    assert!(matches!(
        generate_candidates(&nine_to_six, u32::MAX),
        Err(SlotError::InvalidStep(_))
    ));
    assert!(matches!(
        generate_candidates(&nine_to_six, 24 * 60 + 1),
        Err(SlotError::InvalidStep(_))
    ));
}

#[test]
fn step_longer_than_the_window_yields_nothing() {
    let candidates = generate_candidates(&window(t(9, 0), t(18, 0)), 600).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn full_day_step_fits_only_a_full_day() {
    let candidates = generate_candidates(&window(t(0, 0), t(23, 59)), 24 * 60).unwrap();
    assert!(candidates.is_empty());
    let candidates = generate_candidates(&window(t(0, 0), t(23, 59)), 23 * 60 + 59).unwrap();
    assert_eq!(candidates, vec![t(0, 0)]);
}
