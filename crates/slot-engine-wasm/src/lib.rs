//! WASM bindings for slot-engine.
//!
//! Lets the booking UI preview bookable times client-side with exactly the
//! rules the server applies. All complex types are passed as JSON strings, and
//! outputs use the same `{ "availableTimes": [...] }` shape as
//! `GET /availability`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/booking/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slot_engine::resolver::{resolve_day, ResolveOptions};
use slot_engine::slots::{generate_candidates, OpenWindow};
use slot_engine::time_of_day::{format_hhmm, parse_time_of_day};
use slot_engine::{Appointment, DayOff, WeeklyAvailability, DEFAULT_STEP_MINUTES};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AvailableTimesDto {
    available_times: Vec<String>,
}

/// Input for [`resolve_day_json`]: one barber's data plus the request.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveDayInput {
    date: NaiveDate,
    duration_minutes: u32,
    #[serde(default)]
    step_minutes: Option<u32>,
    #[serde(default)]
    weekly_availability: Vec<WeeklyAvailability>,
    #[serde(default)]
    days_off: Vec<DayOff>,
    #[serde(default)]
    appointments: Vec<Appointment>,
}

// ---------------------------------------------------------------------------
// Target-independent implementations (unit-testable off wasm32)
// ---------------------------------------------------------------------------

fn to_json(times: Vec<String>) -> Result<String, String> {
    serde_json::to_string(&AvailableTimesDto {
        available_times: times,
    })
    .map_err(|e| format!("Serialization error: {}", e))
}

fn generate_slots_json(open: &str, close: &str, step_minutes: Option<u32>) -> Result<String, String> {
    let window = OpenWindow {
        open: parse_time_of_day(open).map_err(|e| e.to_string())?,
        close: parse_time_of_day(close).map_err(|e| e.to_string())?,
    };
    let candidates = generate_candidates(&window, step_minutes.unwrap_or(DEFAULT_STEP_MINUTES))
        .map_err(|e| e.to_string())?;

    to_json(candidates.into_iter().map(format_hhmm).collect())
}

fn resolve_day_json(input_json: &str) -> Result<String, String> {
    let input: ResolveDayInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid input JSON: {}", e))?;

    let options = ResolveOptions {
        step_minutes: input.step_minutes.unwrap_or(DEFAULT_STEP_MINUTES),
        not_before: None,
    };

    let availability = resolve_day(
        input.date,
        input.duration_minutes,
        &input.weekly_availability,
        &input.days_off,
        &input.appointments,
        &options,
    )
    .map_err(|e| e.to_string())?;

    to_json(availability.formatted())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate start-time candidates for an open window.
///
/// `open` and `close` are `HH:mm` strings; `step_minutes` defaults to 30.
/// Returns `{"availableTimes": ["HH:mm", ...]}` as a JSON string.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(open: &str, close: &str, step_minutes: Option<u32>) -> Result<String, JsValue> {
    generate_slots_json(open, close, step_minutes).map_err(|e| JsValue::from_str(&e))
}

/// Resolve one barber's bookable times for one date.
///
/// `input_json` is an object with `date`, `durationMinutes`, optional
/// `stepMinutes`, and the barber's `weeklyAvailability`, `daysOff` and
/// `appointments` arrays in the server's wire format.
#[wasm_bindgen(js_name = "resolveDay")]
pub fn resolve_day_js(input_json: &str) -> Result<String, JsValue> {
    resolve_day_json(input_json).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_slots_matches_server_shape() {
        let json = generate_slots_json("09:00", "10:30", None).unwrap();
        assert_eq!(json, r#"{"availableTimes":["09:00","09:30","10:00"]}"#);
    }

    #[test]
    fn generate_slots_rejects_bad_time() {
        let err = generate_slots_json("9 o'clock", "10:30", None).unwrap_err();
        assert!(err.contains("Invalid time of day"), "got: {}", err);
    }

    #[test]
    fn resolve_day_applies_bookings() {
        let input = r#"{
            "date": "2026-03-16",
            "durationMinutes": 60,
            "weeklyAvailability": [
                { "barberId": "b1", "dayOfWeek": "MONDAY", "startTime": "09:00", "endTime": "12:00", "isAvailable": true }
            ],
            "appointments": [
                { "barberId": "b1", "date": "2026-03-16", "time": "11:00", "durationMinutes": 30, "status": "PENDING" }
            ]
        }"#;

        let json = resolve_day_json(input).unwrap();

        assert_eq!(json, r#"{"availableTimes":["09:00","09:30","10:00"]}"#);
    }

    #[test]
    fn resolve_day_honours_day_off() {
        let input = r#"{
            "date": "2026-03-16",
            "durationMinutes": 30,
            "weeklyAvailability": [
                { "barberId": "b1", "dayOfWeek": "MONDAY", "startTime": "09:00", "endTime": "12:00", "isAvailable": true }
            ],
            "daysOff": [ { "barberId": "b1", "date": "2026-03-16" } ]
        }"#;

        assert_eq!(resolve_day_json(input).unwrap(), r#"{"availableTimes":[]}"#);
    }

    #[test]
    fn generate_slots_rejects_huge_step() {
        let err = generate_slots_json("09:00", "18:00", Some(u32::MAX)).unwrap_err();
        assert!(err.contains("Invalid slot step"), "got: {}", err);
    }

    #[test]
    fn resolve_day_rejects_unbounded_booking() {
        let input = r#"{
            "date": "2026-03-16",
            "durationMinutes": 30,
            "weeklyAvailability": [
                { "barberId": "b1", "dayOfWeek": "MONDAY", "startTime": "09:00", "endTime": "18:00", "isAvailable": true }
            ],
            "appointments": [
                { "barberId": "b1", "date": "2026-03-16", "time": "10:00", "durationMinutes": 4294967295, "status": "CONFIRMED" }
            ]
        }"#;

        let err = resolve_day_json(input).unwrap_err();
        assert!(err.contains("Invalid duration"), "got: {}", err);
    }

    #[test]
    fn resolve_day_rejects_malformed_json() {
        assert!(resolve_day_json("{not json").is_err());
    }
}
