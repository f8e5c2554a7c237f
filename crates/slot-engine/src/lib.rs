//! # slot-engine
//!
//! Deterministic appointment slot resolution for barber schedules.
//!
//! Given a barber's recurring weekly hours, their one-off days off and the
//! bookings already on the books, the engine answers one question: at which
//! times on a given date can a service of a given length start? Everything here
//! is a pure function of its inputs; fetching the data is the caller's job.
//!
//! ## Modules
//!
//! - [`slots`] — open/close window → start-time candidates at a fixed step
//! - [`conflict`] — drop candidates that overlap bookings or overrun closing time
//! - [`resolver`] — day-off / closed-day / open-day decision for one date
//! - [`schedule`] — weekly availability, days off, appointments, services
//! - [`dataset`] — a validated JSON document holding all of the above
//! - [`time_of_day`] — `HH:mm` and `YYYY-MM-DD` wire formats
//! - [`error`] — Error types

pub mod conflict;
pub mod dataset;
pub mod error;
pub mod resolver;
pub mod schedule;
pub mod slots;
pub mod time_of_day;

pub use conflict::{filter_conflicts, find_appointment_conflicts};
pub use dataset::Dataset;
pub use error::SlotError;
pub use resolver::{resolve_day, DayAvailability, ResolveOptions};
pub use schedule::{Appointment, AppointmentStatus, Barber, DayOfWeek, DayOff, Service, WeeklyAvailability};
pub use slots::{generate_candidates, validate_step, OpenWindow, DEFAULT_STEP_MINUTES};
