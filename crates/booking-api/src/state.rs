use std::sync::Arc;

use crate::clock::ShopClock;
use crate::config::BookingConfig;
use crate::ports::{AppointmentRepository, CatalogRepository, ScheduleRepository};
use crate::resolver::AvailabilityResolver;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub resolver: Arc<AvailabilityResolver>,
}

impl AppState {
    /// Wire every port to one store that implements all of them.
    pub fn from_store<S>(store: Arc<S>, step_minutes: u32, clock: ShopClock) -> Self
    where
        S: CatalogRepository + ScheduleRepository + AppointmentRepository + 'static,
    {
        Self::from_ports(store.clone(), store.clone(), store, step_minutes, clock)
    }

    pub fn from_ports(
        catalog: Arc<dyn CatalogRepository>,
        schedules: Arc<dyn ScheduleRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        step_minutes: u32,
        clock: ShopClock,
    ) -> Self {
        let resolver = Arc::new(AvailabilityResolver::new(
            catalog.clone(),
            schedules.clone(),
            appointments.clone(),
            step_minutes,
            clock,
        ));
        Self {
            catalog,
            schedules,
            appointments,
            resolver,
        }
    }

    pub fn from_config<S>(store: Arc<S>, booking: &BookingConfig) -> Self
    where
        S: CatalogRepository + ScheduleRepository + AppointmentRepository + 'static,
    {
        Self::from_store(
            store,
            booking.step_minutes,
            ShopClock::System(booking.timezone),
        )
    }
}
