//! In-memory store adapter backed by a [`Dataset`].
//!
//! Good enough for demos, tests and single-instance deployments seeded from a
//! JSON file. Every write takes the write lock, so the double-booking check in
//! `insert_if_free` cannot race another insert.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use slot_engine::conflict::find_appointment_conflicts;
use slot_engine::time_of_day::format_hhmm;
use slot_engine::{Appointment, AppointmentStatus, Dataset, DayOff, Service, WeeklyAvailability};
use tokio::sync::RwLock;
use tracing::debug;

use crate::ports::{
    AppointmentRepository, CatalogRepository, ScheduleRepository, StoreError, StoreResult,
};

pub struct InMemoryStore {
    data: RwLock<Dataset>,
    next_id: AtomicU64,
}

impl InMemoryStore {
    /// Wrap a dataset. Appointments without an id get one assigned.
    pub fn from_dataset(mut dataset: Dataset) -> Self {
        let next_id = AtomicU64::new(1);
        for apt in dataset.appointments.iter_mut().filter(|a| a.id.is_empty()) {
            apt.id = format!("apt-{}", next_id.fetch_add(1, Ordering::Relaxed));
        }
        Self {
            data: RwLock::new(dataset),
            next_id,
        }
    }

    pub fn empty() -> Self {
        Self::from_dataset(Dataset::default())
    }

    fn allocate_id(&self) -> String {
        format!("apt-{}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
    async fn barber_exists(&self, barber_id: &str) -> StoreResult<bool> {
        Ok(self.data.read().await.barber(barber_id).is_some())
    }

    async fn find_service(&self, service_id: &str) -> StoreResult<Option<Service>> {
        Ok(self.data.read().await.service(service_id).cloned())
    }

    async fn services(&self) -> StoreResult<Vec<Service>> {
        Ok(self.data.read().await.services.clone())
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryStore {
    async fn weekly_availability(&self, barber_id: &str) -> StoreResult<Vec<WeeklyAvailability>> {
        let records = self.data.read().await.schedule_for(barber_id);
        debug!(barber_id, count = records.len(), "loaded weekly availability");
        Ok(records)
    }

    async fn upsert_weekly_availability(
        &self,
        record: WeeklyAvailability,
    ) -> StoreResult<WeeklyAvailability> {
        let mut data = self.data.write().await;
        match data
            .weekly_availability
            .iter_mut()
            .find(|r| r.barber_id == record.barber_id && r.day_of_week == record.day_of_week)
        {
            Some(existing) => *existing = record.clone(),
            None => data.weekly_availability.push(record.clone()),
        }
        Ok(record)
    }

    async fn days_off(&self, barber_id: &str) -> StoreResult<Vec<DayOff>> {
        let days = self.data.read().await.days_off_for(barber_id);
        debug!(barber_id, count = days.len(), "loaded days off");
        Ok(days)
    }

    async fn add_day_off(&self, day_off: DayOff) -> StoreResult<DayOff> {
        let mut data = self.data.write().await;
        match data
            .days_off
            .iter_mut()
            .find(|d| d.barber_id == day_off.barber_id && d.date == day_off.date)
        {
            Some(existing) => existing.reason = day_off.reason.clone(),
            None => data.days_off.push(day_off.clone()),
        }
        Ok(day_off)
    }

    async fn remove_day_off(&self, barber_id: &str, date: NaiveDate) -> StoreResult<bool> {
        let mut data = self.data.write().await;
        let before = data.days_off.len();
        data.days_off
            .retain(|d| !(d.barber_id == barber_id && d.date == date));
        Ok(data.days_off.len() != before)
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryStore {
    async fn active_appointments(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>> {
        let appointments = self.data.read().await.active_appointments_for(barber_id, date);
        debug!(barber_id, %date, count = appointments.len(), "loaded active appointments");
        Ok(appointments)
    }

    async fn appointments_on(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>> {
        let mut appointments: Vec<Appointment> = self
            .data
            .read()
            .await
            .appointments
            .iter()
            .filter(|a| a.barber_id == barber_id && a.date == date)
            .cloned()
            .collect();
        appointments.sort_by_key(|a| a.time);
        Ok(appointments)
    }

    async fn insert_if_free(&self, mut appointment: Appointment) -> StoreResult<Appointment> {
        let mut data = self.data.write().await;

        let same_day = data.active_appointments_for(&appointment.barber_id, appointment.date);
        let conflicts =
            find_appointment_conflicts(appointment.time, appointment.duration_minutes, &same_day);
        if let Some(first) = conflicts.first() {
            return Err(StoreError::Conflict(format!(
                "barber '{}' is already booked at {} on {}",
                appointment.barber_id,
                format_hhmm(first.appointment.time),
                appointment.date
            )));
        }

        appointment.id = self.allocate_id();
        data.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn update_status(
        &self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> StoreResult<Appointment> {
        let mut data = self.data.write().await;
        let appointment = data
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or_else(|| StoreError::NotFound(format!("appointment '{}'", appointment_id)))?;

        if !appointment.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                from: appointment.status,
                to: status,
            });
        }

        appointment.status = status;
        Ok(appointment.clone())
    }
}
