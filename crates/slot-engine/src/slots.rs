//! Turn a day's open/close window into start-time candidates at a fixed step.
//!
//! Candidates are produced at step granularity regardless of any particular
//! service's duration; fitting a service into the day is the conflict filter's job.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time_of_day::{from_minutes, hhmm, minutes_of_day, MINUTES_PER_DAY};

/// Default distance between two candidate start times, in minutes.
///
/// Matches the shortest service in the shop's catalogue. Callers that need a
/// different granularity pass their own value through `ResolveOptions`.
pub const DEFAULT_STEP_MINUTES: u32 = 30;

/// A half-open `[open, close)` window of bookable time on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindow {
    #[serde(with = "hhmm")]
    pub open: NaiveTime,
    #[serde(with = "hhmm")]
    pub close: NaiveTime,
}

impl OpenWindow {
    /// `true` when the window holds no time at all (the normal shape of a closed day).
    pub fn is_empty(&self) -> bool {
        self.open >= self.close
    }
}

/// Validate a candidate step.
///
/// # Errors
/// Returns `SlotError::InvalidStep` for zero or longer-than-a-day steps.
pub fn validate_step(step_minutes: u32) -> Result<()> {
    if step_minutes == 0 || step_minutes > MINUTES_PER_DAY {
        return Err(SlotError::InvalidStep(format!(
            "{} minutes is outside 1..={}",
            step_minutes, MINUTES_PER_DAY
        )));
    }
    Ok(())
}

/// Generate every start time `open + k * step` whose step-long slot still ends
/// by `close`, earliest first.
///
/// An empty or inverted window yields an empty list.
///
/// # Errors
/// Returns `SlotError::InvalidStep` unless `step_minutes` is within one day.
pub fn generate_candidates(window: &OpenWindow, step_minutes: u32) -> Result<Vec<NaiveTime>> {
    validate_step(step_minutes)?;

    if window.is_empty() {
        return Ok(Vec::new());
    }

    let close = minutes_of_day(window.close);
    let mut cursor = minutes_of_day(window.open);
    let mut candidates = Vec::new();

    while let Some(next) = cursor.checked_add(step_minutes).filter(|next| *next <= close) {
        // cursor < close < 24h, so the conversion cannot fail here.
        if let Some(time) = from_minutes(cursor) {
            candidates.push(time);
        }
        cursor = next;
    }

    Ok(candidates)
}
