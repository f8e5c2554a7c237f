use axum::{
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::{appointments, availability, barbers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/availability", get(availability::get_availability))
        .route("/services", get(availability::list_services))
        .route("/barbers/{barber_id}/availability", get(barbers::list_weekly))
        .route(
            "/barbers/{barber_id}/availability/{day}",
            put(barbers::upsert_weekly),
        )
        .route(
            "/barbers/{barber_id}/days-off",
            get(barbers::list_days_off).post(barbers::add_day_off),
        )
        .route(
            "/barbers/{barber_id}/days-off/{date}",
            delete(barbers::remove_day_off),
        )
        .route(
            "/barbers/{barber_id}/appointments",
            get(appointments::list_for_day),
        )
        .route("/appointments", post(appointments::create))
        .route(
            "/appointments/{appointment_id}/status",
            patch(appointments::update_status),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
