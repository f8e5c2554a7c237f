//! Appointment write path and per-day listing.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use slot_engine::time_of_day::{format_hhmm, parse_date, parse_time_of_day};
use slot_engine::{Appointment, AppointmentStatus};
use tracing::{info, warn};

use crate::availability::required;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentBody {
    barber_id: String,
    service_id: String,
    date: String,
    time: String,
    #[serde(default)]
    client_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    status: AppointmentStatus,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    date: Option<String>,
}

/// Book a slot. The time must be one the resolver offers for that day, and the
/// store re-checks for overlaps atomically before inserting.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateAppointmentBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let Json(body) = body?;
    let date = parse_date(&body.date)?;
    let time = parse_time_of_day(&body.time)?;

    let service = state.resolver.lookup(&body.barber_id, &body.service_id).await?;
    let availability = state
        .resolver
        .resolve_for_service(&body.barber_id, date, &service)
        .await?;

    if !availability.is_bookable(time) {
        warn!(barber_id = %body.barber_id, %date, time = %format_hhmm(time), "requested time is not bookable");
        return Err(AppError::Conflict(format!(
            "{} on {} is not available for '{}'",
            format_hhmm(time),
            date,
            service.id
        )));
    }

    let created = state
        .appointments
        .insert_if_free(Appointment {
            id: String::new(),
            barber_id: body.barber_id,
            date,
            time,
            duration_minutes: service.duration_minutes,
            status: AppointmentStatus::Pending,
            service_id: Some(service.id),
            client_name: body.client_name,
        })
        .await
        .inspect_err(|err| warn!("booking rejected by store: {}", err))?;

    info!(id = %created.id, barber_id = %created.barber_id, date = %created.date, time = %format_hhmm(created.time), "appointment booked");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    body: Result<Json<StatusBody>, JsonRejection>,
) -> AppResult<Json<Appointment>> {
    let Json(body) = body?;
    let updated = state
        .appointments
        .update_status(&appointment_id, body.status)
        .await?;
    info!(id = %updated.id, status = ?updated.status, "appointment status changed");
    Ok(Json(updated))
}

pub async fn list_for_day(
    State(state): State<AppState>,
    Path(barber_id): Path<String>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Appointment>>> {
    let Query(query) = query?;
    let date = parse_date(&required(query.date, "date")?)?;

    if !state.catalog.barber_exists(&barber_id).await? {
        return Err(AppError::NotFound(format!("barber '{}'", barber_id)));
    }
    Ok(Json(state.appointments.appointments_on(&barber_id, date).await?))
}
