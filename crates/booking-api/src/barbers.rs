//! Barber settings: weekly hours and days off.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use slot_engine::time_of_day::{hhmm, parse_date};
use slot_engine::{DayOfWeek, DayOff, WeeklyAvailability};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAvailabilityBody {
    #[serde(with = "hhmm")]
    start_time: NaiveTime,
    #[serde(with = "hhmm")]
    end_time: NaiveTime,
    is_available: bool,
}

#[derive(Debug, Deserialize)]
pub struct DayOffBody {
    date: NaiveDate,
    #[serde(default)]
    reason: Option<String>,
}

async fn ensure_barber(state: &AppState, barber_id: &str) -> AppResult<()> {
    if state.catalog.barber_exists(barber_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("barber '{}'", barber_id)))
    }
}

pub async fn list_weekly(
    State(state): State<AppState>,
    Path(barber_id): Path<String>,
) -> AppResult<Json<Vec<WeeklyAvailability>>> {
    ensure_barber(&state, &barber_id).await?;
    Ok(Json(state.schedules.weekly_availability(&barber_id).await?))
}

pub async fn upsert_weekly(
    State(state): State<AppState>,
    Path((barber_id, day)): Path<(String, String)>,
    body: Result<Json<WeeklyAvailabilityBody>, JsonRejection>,
) -> AppResult<Json<WeeklyAvailability>> {
    let Json(body) = body?;
    ensure_barber(&state, &barber_id).await?;
    let day_of_week: DayOfWeek = day.parse()?;

    let record = WeeklyAvailability {
        barber_id,
        day_of_week,
        start_time: body.start_time,
        end_time: body.end_time,
        is_available: body.is_available,
    };
    if let Err(err) = record.validate() {
        warn!(barber_id = %record.barber_id, %day_of_week, "rejected weekly availability: {}", err);
        return Err(err.into());
    }

    let saved = state.schedules.upsert_weekly_availability(record).await?;
    info!(barber_id = %saved.barber_id, day = %saved.day_of_week, available = saved.is_available, "weekly availability saved");
    Ok(Json(saved))
}

pub async fn list_days_off(
    State(state): State<AppState>,
    Path(barber_id): Path<String>,
) -> AppResult<Json<Vec<DayOff>>> {
    ensure_barber(&state, &barber_id).await?;
    Ok(Json(state.schedules.days_off(&barber_id).await?))
}

pub async fn add_day_off(
    State(state): State<AppState>,
    Path(barber_id): Path<String>,
    body: Result<Json<DayOffBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DayOff>)> {
    let Json(body) = body?;
    ensure_barber(&state, &barber_id).await?;

    let saved = state
        .schedules
        .add_day_off(DayOff {
            barber_id,
            date: body.date,
            reason: body.reason.filter(|r| !r.trim().is_empty()),
        })
        .await?;
    info!(barber_id = %saved.barber_id, date = %saved.date, "day off recorded");
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn remove_day_off(
    State(state): State<AppState>,
    Path((barber_id, date)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    ensure_barber(&state, &barber_id).await?;
    let date = parse_date(&date)?;

    if state.schedules.remove_day_off(&barber_id, date).await? {
        info!(%barber_id, %date, "day off removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "no day off for barber '{}' on {}",
            barber_id, date
        )))
    }
}
