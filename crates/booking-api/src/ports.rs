//! Store ports consumed by the availability resolver and the HTTP handlers.
//!
//! Durable storage is an external collaborator; these traits are the only
//! thing the service knows about it. [`crate::memory::InMemoryStore`] is the
//! bundled adapter.

use async_trait::async_trait;
use chrono::NaiveDate;
use slot_engine::{Appointment, AppointmentStatus, DayOff, Service, WeeklyAvailability};
use thiserror::Error;

/// Errors surfaced by store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend is unreachable or timing out.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A write would double-book a barber.
    #[error("booking conflict: {0}")]
    Conflict(String),

    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A status change the appointment lifecycle does not allow.
    #[error("cannot move appointment from {from:?} to {to:?}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Barbers and the service catalogue.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn barber_exists(&self, barber_id: &str) -> StoreResult<bool>;

    async fn find_service(&self, service_id: &str) -> StoreResult<Option<Service>>;

    async fn services(&self) -> StoreResult<Vec<Service>>;
}

/// Recurring weekly hours and one-off days off.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// All weekly records for a barber, Monday first.
    async fn weekly_availability(&self, barber_id: &str) -> StoreResult<Vec<WeeklyAvailability>>;

    /// Insert or replace the record for `(record.barber_id, record.day_of_week)`.
    async fn upsert_weekly_availability(
        &self,
        record: WeeklyAvailability,
    ) -> StoreResult<WeeklyAvailability>;

    /// All days off for a barber, earliest first.
    async fn days_off(&self, barber_id: &str) -> StoreResult<Vec<DayOff>>;

    /// Record a day off. Re-adding an existing date replaces its reason.
    async fn add_day_off(&self, day_off: DayOff) -> StoreResult<DayOff>;

    /// Returns `false` when there was no day off on that date.
    async fn remove_day_off(&self, barber_id: &str, date: NaiveDate) -> StoreResult<bool>;
}

/// Bookings.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Non-cancelled appointments for a barber on a date.
    async fn active_appointments(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>>;

    /// Every appointment for a barber on a date, sorted by time.
    async fn appointments_on(&self, barber_id: &str, date: NaiveDate)
        -> StoreResult<Vec<Appointment>>;

    /// Insert `appointment` unless it overlaps an active booking for the same
    /// barber and date. The check and the insert are atomic. The store assigns
    /// the id.
    async fn insert_if_free(&self, appointment: Appointment) -> StoreResult<Appointment>;

    /// Move an appointment to `status` if the lifecycle allows it.
    async fn update_status(
        &self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> StoreResult<Appointment>;
}
