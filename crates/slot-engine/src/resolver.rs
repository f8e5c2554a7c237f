//! Resolve the bookable start times for one barber on one date.
//!
//! This is the pure half of availability resolution: the caller fetches the
//! barber's weekly schedule, days off and appointments, and this module decides.
//! Identical inputs always give identical output.

use chrono::{NaiveDate, NaiveTime};

use crate::conflict::filter_conflicts;
use crate::error::{Result, SlotError};
use crate::schedule::{Appointment, DayOfWeek, DayOff, WeeklyAvailability};
use crate::slots::{generate_candidates, validate_step, DEFAULT_STEP_MINUTES};
use crate::time_of_day::{format_hhmm, MINUTES_PER_DAY};

/// Tunables for a single resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Distance between candidate start times, in minutes.
    pub step_minutes: u32,
    /// Drop candidates earlier than this time. Used for "today" so that
    /// already-elapsed times are not offered.
    pub not_before: Option<NaiveTime>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            step_minutes: DEFAULT_STEP_MINUTES,
            not_before: None,
        }
    }
}

/// Outcome of resolving one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayAvailability {
    /// A day-off record exists for the date.
    DayOff { reason: Option<String> },
    /// No weekly schedule for that weekday, or the barber is marked unavailable.
    Closed,
    /// A working day; the list may still be empty when fully booked.
    Open(Vec<NaiveTime>),
}

impl DayAvailability {
    /// The bookable start times, earliest first. Empty for days off and closed days.
    pub fn times(&self) -> &[NaiveTime] {
        match self {
            DayAvailability::Open(times) => times.as_slice(),
            DayAvailability::DayOff { .. } | DayAvailability::Closed => &[],
        }
    }

    /// The start times rendered as `HH:mm`.
    pub fn formatted(&self) -> Vec<String> {
        self.times().iter().copied().map(format_hhmm).collect()
    }

    pub fn is_bookable(&self, time: NaiveTime) -> bool {
        self.times().contains(&time)
    }
}

/// Validate a requested service duration.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` for zero or longer-than-a-day durations.
pub fn validate_duration(duration_minutes: u32) -> Result<()> {
    if duration_minutes == 0 || duration_minutes > MINUTES_PER_DAY {
        return Err(SlotError::InvalidDuration(format!(
            "{} minutes is outside 1..={}",
            duration_minutes, MINUTES_PER_DAY
        )));
    }
    Ok(())
}

/// Resolve the bookable start times on `date` for a service lasting
/// `duration_minutes`.
///
/// All records are expected to belong to the same barber. Precedence:
/// 1. a day-off record for `date` wins over everything else;
/// 2. a missing or unavailable weekly record closes the day;
/// 3. otherwise candidates are generated at `options.step_minutes` and filtered
///    against the active appointments on `date`.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` or `SlotError::InvalidStep` for malformed
/// inputs, including an appointment with an out-of-range duration. Missing
/// schedule data is never an error.
pub fn resolve_day(
    date: NaiveDate,
    duration_minutes: u32,
    schedule: &[WeeklyAvailability],
    days_off: &[DayOff],
    appointments: &[Appointment],
    options: &ResolveOptions,
) -> Result<DayAvailability> {
    validate_duration(duration_minutes)?;
    validate_step(options.step_minutes)?;
    for apt in appointments {
        validate_duration(apt.duration_minutes).map_err(|e| {
            SlotError::InvalidDuration(format!("appointment '{}': {}", apt.id, e))
        })?;
    }

    if let Some(day_off) = days_off.iter().find(|d| d.date == date) {
        return Ok(DayAvailability::DayOff {
            reason: day_off.reason.clone(),
        });
    }

    let weekday = DayOfWeek::of(date);
    let Some(window) = schedule
        .iter()
        .find(|record| record.day_of_week == weekday)
        .and_then(WeeklyAvailability::window)
    else {
        return Ok(DayAvailability::Closed);
    };

    let candidates = generate_candidates(&window, options.step_minutes)?;

    let same_day: Vec<Appointment> = appointments
        .iter()
        .filter(|apt| apt.date == date && apt.is_active())
        .cloned()
        .collect();

    let mut times = filter_conflicts(&candidates, duration_minutes, window.close, &same_day);

    if let Some(cutoff) = options.not_before {
        times.retain(|time| *time >= cutoff);
    }

    Ok(DayAvailability::Open(times))
}
