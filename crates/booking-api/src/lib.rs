//! # booking-api
//!
//! HTTP service for the barbershop booking flow: bookable times per barber,
//! barber schedule settings and the appointment write path.
//!
//! ## Modules
//!
//! - [`resolver`] — concurrent store reads feeding the slot engine
//! - [`ports`] — store traits the service depends on
//! - [`memory`] — in-memory store adapter seeded from a dataset file
//! - [`routes`] — axum router
//! - [`availability`], [`barbers`], [`appointments`] — request handlers
//! - [`config`] — environment configuration
//! - [`error`] — HTTP error mapping

pub mod appointments;
pub mod availability;
pub mod barbers;
pub mod clock;
pub mod config;
pub mod error;
pub mod memory;
pub mod ports;
pub mod resolver;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use memory::InMemoryStore;
pub use routes::create_router;
pub use state::AppState;
