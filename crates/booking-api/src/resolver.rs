//! Availability resolver: fetch a barber's schedule data and hand it to the
//! pure slot engine.
//!
//! The three reads (weekly hours, days off, active appointments) are
//! independent and run concurrently. No retries happen here; a store failure
//! goes straight back to the caller.
//!
//! The result only narrows candidates. Two clients can still see the same free
//! slot; `AppointmentRepository::insert_if_free` is what prevents double booking.

use std::sync::Arc;

use chrono::NaiveDate;
use slot_engine::resolver::{resolve_day, validate_duration, DayAvailability, ResolveOptions};
use slot_engine::Service;
use tracing::{debug, info};

use crate::clock::ShopClock;
use crate::error::{AppError, AppResult};
use crate::ports::{AppointmentRepository, CatalogRepository, ScheduleRepository};

pub struct AvailabilityResolver {
    catalog: Arc<dyn CatalogRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    step_minutes: u32,
    clock: ShopClock,
}

impl AvailabilityResolver {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        schedules: Arc<dyn ScheduleRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        step_minutes: u32,
        clock: ShopClock,
    ) -> Self {
        Self {
            catalog,
            schedules,
            appointments,
            step_minutes,
            clock,
        }
    }

    /// Bookable times for `service_id` with `barber_id` on `date`.
    ///
    /// # Errors
    /// `NotFound` for unknown barber or service ids, `Upstream` when a store
    /// read fails. An unconfigured schedule is not an error: it resolves to no
    /// slots.
    pub async fn resolve(
        &self,
        barber_id: &str,
        date: NaiveDate,
        service_id: &str,
    ) -> AppResult<DayAvailability> {
        let service = self.lookup(barber_id, service_id).await?;
        self.resolve_for_service(barber_id, date, &service).await
    }

    /// Check that the barber exists and fetch the service.
    pub async fn lookup(&self, barber_id: &str, service_id: &str) -> AppResult<Service> {
        let (barber_exists, service) = tokio::try_join!(
            self.catalog.barber_exists(barber_id),
            self.catalog.find_service(service_id),
        )?;

        if !barber_exists {
            return Err(AppError::NotFound(format!("barber '{}'", barber_id)));
        }
        service.ok_or_else(|| AppError::NotFound(format!("service '{}'", service_id)))
    }

    /// Resolve for an already looked-up service.
    pub async fn resolve_for_service(
        &self,
        barber_id: &str,
        date: NaiveDate,
        service: &Service,
    ) -> AppResult<DayAvailability> {
        validate_duration(service.duration_minutes)?;

        let now = self.clock.now_local();
        if date < now.date() {
            debug!(barber_id, %date, "date is in the past");
            return Ok(DayAvailability::Open(Vec::new()));
        }

        let options = ResolveOptions {
            step_minutes: self.step_minutes,
            not_before: (date == now.date()).then(|| now.time()),
        };

        let (schedule, days_off, appointments) = tokio::try_join!(
            self.schedules.weekly_availability(barber_id),
            self.schedules.days_off(barber_id),
            self.appointments.active_appointments(barber_id, date),
        )?;

        let availability = resolve_day(
            date,
            service.duration_minutes,
            &schedule,
            &days_off,
            &appointments,
            &options,
        )
        .map_err(AppError::from)?;

        match &availability {
            DayAvailability::DayOff { reason } => {
                info!(barber_id, %date, reason = reason.as_deref().unwrap_or(""), "barber has the day off");
            }
            DayAvailability::Closed => info!(barber_id, %date, "barber does not work this weekday"),
            DayAvailability::Open(times) => {
                info!(barber_id, %date, service = %service.id, slots = times.len(), "resolved availability");
            }
        }

        Ok(availability)
    }
}
