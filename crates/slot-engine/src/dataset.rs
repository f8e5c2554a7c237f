//! A self-contained booking dataset: barbers, services, schedules and bookings.
//!
//! The JSON form of [`Dataset`] seeds the server's in-memory store and is the
//! input format of the `slots` CLI.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::resolver::{resolve_day, validate_duration, DayAvailability, ResolveOptions};
use crate::schedule::{Appointment, Barber, DayOff, Service, WeeklyAvailability};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub barbers: Vec<Barber>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub weekly_availability: Vec<WeeklyAvailability>,
    #[serde(default)]
    pub days_off: Vec<DayOff>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl Dataset {
    /// Parse and validate a dataset from JSON.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDataset` for malformed JSON or any violated
    /// invariant (see [`Dataset::validate`]).
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset =
            serde_json::from_str(json).map_err(|e| SlotError::InvalidDataset(e.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check cross-record invariants:
    /// - barber and service ids are unique;
    /// - every service and appointment duration is a valid booking length;
    /// - at most one weekly record per barber and weekday, each with a valid window;
    /// - every record refers to a known barber (and service, when it names one).
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDataset` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut barber_ids = HashSet::new();
        for barber in &self.barbers {
            if !barber_ids.insert(barber.id.as_str()) {
                return Err(invalid(format!("duplicate barber id '{}'", barber.id)));
            }
        }

        let mut service_ids = HashSet::new();
        for service in &self.services {
            if !service_ids.insert(service.id.as_str()) {
                return Err(invalid(format!("duplicate service id '{}'", service.id)));
            }
            validate_duration(service.duration_minutes)
                .map_err(|e| invalid(format!("service '{}': {}", service.id, e)))?;
        }

        let known_barber = |id: &str, what: &str| -> Result<()> {
            if barber_ids.contains(id) {
                Ok(())
            } else {
                Err(invalid(format!("{} refers to unknown barber '{}'", what, id)))
            }
        };

        let mut weekly_keys = HashSet::new();
        for record in &self.weekly_availability {
            known_barber(record.barber_id.as_str(), "weekly availability")?;
            if !weekly_keys.insert((record.barber_id.as_str(), record.day_of_week)) {
                return Err(invalid(format!(
                    "barber '{}' has more than one {} record",
                    record.barber_id, record.day_of_week
                )));
            }
            record
                .validate()
                .map_err(|e| invalid(e.to_string()))?;
        }

        for day_off in &self.days_off {
            known_barber(day_off.barber_id.as_str(), "day off")?;
        }

        for apt in &self.appointments {
            known_barber(apt.barber_id.as_str(), "appointment")?;
            validate_duration(apt.duration_minutes)
                .map_err(|e| invalid(format!("appointment '{}': {}", apt.id, e)))?;
            if let Some(service_id) = &apt.service_id {
                if !service_ids.contains(service_id.as_str()) {
                    return Err(invalid(format!(
                        "appointment '{}' refers to unknown service '{}'",
                        apt.id, service_id
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn barber(&self, barber_id: &str) -> Option<&Barber> {
        self.barbers.iter().find(|b| b.id == barber_id)
    }

    pub fn service(&self, service_id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == service_id)
    }

    pub fn schedule_for(&self, barber_id: &str) -> Vec<WeeklyAvailability> {
        let mut records: Vec<WeeklyAvailability> = self
            .weekly_availability
            .iter()
            .filter(|r| r.barber_id == barber_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.day_of_week);
        records
    }

    pub fn days_off_for(&self, barber_id: &str) -> Vec<DayOff> {
        let mut days: Vec<DayOff> = self
            .days_off
            .iter()
            .filter(|d| d.barber_id == barber_id)
            .cloned()
            .collect();
        days.sort_by_key(|d| d.date);
        days
    }

    /// Active appointments for one barber on one date.
    pub fn active_appointments_for(&self, barber_id: &str, date: NaiveDate) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.barber_id == barber_id && a.date == date && a.is_active())
            .cloned()
            .collect()
    }

    /// Resolve bookable times for `service_id` with `barber_id` on `date`.
    ///
    /// # Errors
    /// Returns `SlotError::UnknownBarber` / `SlotError::UnknownService` for ids
    /// not in the dataset, plus any error from [`resolve_day`].
    pub fn resolve(
        &self,
        barber_id: &str,
        date: NaiveDate,
        service_id: &str,
        options: &ResolveOptions,
    ) -> Result<DayAvailability> {
        if self.barber(barber_id).is_none() {
            return Err(SlotError::UnknownBarber(barber_id.to_string()));
        }
        let service = self
            .service(service_id)
            .ok_or_else(|| SlotError::UnknownService(service_id.to_string()))?;

        resolve_day(
            date,
            service.duration_minutes,
            &self.schedule_for(barber_id),
            &self.days_off_for(barber_id),
            &self.active_appointments_for(barber_id, date),
            options,
        )
    }
}

fn invalid(message: String) -> SlotError {
    SlotError::InvalidDataset(message)
}
