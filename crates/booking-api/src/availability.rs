//! `GET /availability` and `GET /services` — the booking UI's read side.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use slot_engine::time_of_day::parse_date;
use slot_engine::Service;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters are kept as raw strings so that a missing or malformed
/// value becomes a JSON validation error instead of a bare extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    barber_id: Option<String>,
    date: Option<String>,
    service_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available_times: Vec<String>,
}

pub(crate) fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("missing query parameter '{}'", name)))
}

pub async fn get_availability(
    State(state): State<AppState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> AppResult<Json<AvailabilityResponse>> {
    let Query(query) = query?;
    let barber_id = required(query.barber_id, "barberId")?;
    let service_id = required(query.service_id, "serviceId")?;
    let date = parse_date(&required(query.date, "date")?)?;

    let availability = state.resolver.resolve(&barber_id, date, &service_id).await?;

    Ok(Json(AvailabilityResponse {
        available_times: availability.formatted(),
    }))
}

pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    Ok(Json(state.catalog.services().await?))
}
