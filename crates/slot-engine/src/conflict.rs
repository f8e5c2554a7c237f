//! Remove start-time candidates that clash with existing bookings.
//!
//! Intervals are half-open: a booking ending exactly when another begins is NOT
//! a conflict. Cancelled appointments never block anything.

use chrono::NaiveTime;

use crate::schedule::Appointment;
use crate::time_of_day::minutes_of_day;

/// A clash between a proposed booking and an existing appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub appointment: Appointment,
    pub overlap_minutes: u32,
}

/// Half-open interval overlap test on `(start, end)` minute pairs.
///
/// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
pub fn overlaps(a: (u32, u32), b: (u32, u32)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// Keep only the candidates that can host a `duration_minutes` booking.
///
/// A candidate `C` is dropped when `C + duration` runs past `close`, or when
/// `[C, C + duration)` overlaps any active appointment. Relative order is kept.
pub fn filter_conflicts(
    candidates: &[NaiveTime],
    duration_minutes: u32,
    close: NaiveTime,
    appointments: &[Appointment],
) -> Vec<NaiveTime> {
    let close = minutes_of_day(close);
    let busy: Vec<(u32, u32)> = appointments
        .iter()
        .filter(|apt| apt.is_active())
        .map(Appointment::interval)
        .collect();

    candidates
        .iter()
        .copied()
        .filter(|candidate| {
            let start = minutes_of_day(*candidate);
            let end = start.saturating_add(duration_minutes);
            end <= close && !busy.iter().any(|interval| overlaps((start, end), *interval))
        })
        .collect()
}

/// Find every active appointment a proposed `[start, start + duration)` booking
/// would collide with, together with the overlap length.
pub fn find_appointment_conflicts(
    start: NaiveTime,
    duration_minutes: u32,
    existing: &[Appointment],
) -> Vec<Conflict> {
    let proposed_start = minutes_of_day(start);
    let proposed = (proposed_start, proposed_start.saturating_add(duration_minutes));

    existing
        .iter()
        .filter(|apt| apt.is_active())
        .filter_map(|apt| {
            let interval = apt.interval();
            if !overlaps(proposed, interval) {
                return None;
            }
            let overlap_minutes = proposed.1.min(interval.1) - proposed.0.max(interval.0);
            Some(Conflict {
                appointment: apt.clone(),
                overlap_minutes,
            })
        })
        .collect()
}
