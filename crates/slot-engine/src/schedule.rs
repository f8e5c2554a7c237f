//! Schedule records: weekly availability, days off, appointments and services.
//!
//! These are the shapes the schedule and appointment stores hand to the
//! resolver. All of them serialize with camelCase field names.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::slots::OpenWindow;
use crate::time_of_day::{hhmm, minutes_of_day};

/// Day of the week, serialized as `"MONDAY"` .. `"SUNDAY"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Monday first, matching the order the settings form lists them in.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// The weekday a calendar date falls on.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = SlotError;

    /// Accepts full names (`MONDAY`) and three-letter abbreviations (`MON`),
    /// case-insensitively.
    fn from_str(raw: &str) -> Result<Self> {
        let upper = raw.trim().to_ascii_uppercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == upper || day.as_str()[..3] == upper)
            .ok_or_else(|| SlotError::InvalidDayOfWeek(raw.to_string()))
    }
}

/// Recurring open/close window for one barber on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAvailability {
    pub barber_id: String,
    pub day_of_week: DayOfWeek,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub is_available: bool,
}

impl WeeklyAvailability {
    /// Check the record's own invariant: an open day must have `start < end`.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidWindow` when the barber is marked available but
    /// the window is empty or inverted.
    pub fn validate(&self) -> Result<()> {
        if self.is_available && self.start_time >= self.end_time {
            return Err(SlotError::InvalidWindow(format!(
                "{} for barber '{}': start {} is not before end {}",
                self.day_of_week,
                self.barber_id,
                self.start_time.format("%H:%M"),
                self.end_time.format("%H:%M"),
            )));
        }
        Ok(())
    }

    /// The bookable window for this weekday, or `None` when the barber is off.
    pub fn window(&self) -> Option<OpenWindow> {
        self.is_available.then(|| OpenWindow {
            open: self.start_time,
            close: self.end_time,
        })
    }
}

/// A one-off date on which a barber takes no bookings at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOff {
    pub barber_id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Every status except `Cancelled` holds on to its time slot.
    pub fn is_active(self) -> bool {
        self != AppointmentStatus::Cancelled
    }

    /// Allowed moves: pending → confirmed | cancelled, confirmed → completed | cancelled.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }
}

/// An existing booking. Read-only from the resolver's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    pub id: String,
    pub barber_id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl Appointment {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Half-open `[start, end)` interval in minutes since midnight.
    ///
    /// `end` may exceed one day for a booking that runs past midnight.
    pub fn interval(&self) -> (u32, u32) {
        let start = minutes_of_day(self.time);
        (start, start.saturating_add(self.duration_minutes))
    }
}

/// A bookable service from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
}

/// A barber known to the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: String,
    pub name: String,
}
