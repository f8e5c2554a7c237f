//! Tests for dataset loading, validation and dataset-level resolution.

use chrono::NaiveDate;
use slot_engine::{Dataset, ResolveOptions, SlotError};

const SHOP: &str = r#"{
  "barbers": [
    { "id": "b1", "name": "Marco" },
    { "id": "b2", "name": "Lena" }
  ],
  "services": [
    { "id": "cut", "name": "Haircut", "durationMinutes": 30 },
    { "id": "full", "name": "Cut and beard", "durationMinutes": 60 }
  ],
  "weeklyAvailability": [
    { "barberId": "b1", "dayOfWeek": "MONDAY", "startTime": "09:00", "endTime": "18:00", "isAvailable": true },
    { "barberId": "b1", "dayOfWeek": "TUESDAY", "startTime": "09:00", "endTime": "18:00", "isAvailable": false },
    { "barberId": "b2", "dayOfWeek": "MONDAY", "startTime": "12:00", "endTime": "14:00", "isAvailable": true }
  ],
  "daysOff": [
    { "barberId": "b2", "date": "2026-03-23", "reason": "training" }
  ],
  "appointments": [
    { "id": "a1", "barberId": "b1", "date": "2026-03-16", "time": "11:00", "durationMinutes": 30, "status": "CONFIRMED", "serviceId": "cut" },
    { "id": "a2", "barberId": "b1", "date": "2026-03-16", "time": "14:00", "durationMinutes": 30, "status": "CANCELLED" }
  ]
}"#;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

fn with_field(field: &str, value: serde_json::Value) -> String {
    let mut doc: serde_json::Value = serde_json::from_str(SHOP).unwrap();
    doc[field] = value;
    doc.to_string()
}

#[test]
fn loads_a_valid_dataset() {
    let dataset = Dataset::from_json(SHOP).unwrap();

    assert_eq!(dataset.barbers.len(), 2);
    assert_eq!(dataset.service("full").unwrap().duration_minutes, 60);
    assert_eq!(dataset.schedule_for("b1").len(), 2);
    assert_eq!(dataset.active_appointments_for("b1", monday()).len(), 1);
}

#[test]
fn resolves_against_the_dataset() {
    let dataset = Dataset::from_json(SHOP).unwrap();

    let result = dataset
        .resolve("b1", monday(), "full", &ResolveOptions::default())
        .unwrap();
    let times = result.formatted();

    assert!(!times.contains(&"10:30".to_string()));
    assert!(times.contains(&"11:30".to_string()));
    // The cancelled 14:00 booking frees its slot.
    assert!(times.contains(&"14:00".to_string()));
    assert_eq!(times.last().map(String::as_str), Some("17:00"));
}

#[test]
fn schedules_are_scoped_per_barber() {
    let dataset = Dataset::from_json(SHOP).unwrap();

    let lena = dataset
        .resolve("b2", monday(), "cut", &ResolveOptions::default())
        .unwrap();
    assert_eq!(lena.formatted(), vec!["12:00", "12:30", "13:00", "13:30"]);

    let next_monday = NaiveDate::from_ymd_opt(2026, 3, 23).unwrap();
    let off = dataset
        .resolve("b2", next_monday, "cut", &ResolveOptions::default())
        .unwrap();
    assert!(off.times().is_empty());
}

#[test]
fn unknown_ids_are_reported() {
    let dataset = Dataset::from_json(SHOP).unwrap();

    assert!(matches!(
        dataset.resolve("nobody", monday(), "cut", &ResolveOptions::default()),
        Err(SlotError::UnknownBarber(_))
    ));
    assert!(matches!(
        dataset.resolve("b1", monday(), "perm", &ResolveOptions::default()),
        Err(SlotError::UnknownService(_))
    ));
}

#[test]
fn rejects_duplicate_weekday_records() {
    let json = with_field(
        "weeklyAvailability",
        serde_json::json!([
            { "barberId": "b1", "dayOfWeek": "MONDAY", "startTime": "09:00", "endTime": "18:00", "isAvailable": true },
            { "barberId": "b1", "dayOfWeek": "MONDAY", "startTime": "10:00", "endTime": "12:00", "isAvailable": true }
        ]),
    );
    assert!(matches!(Dataset::from_json(&json), Err(SlotError::InvalidDataset(_))));
}

#[test]
fn rejects_inverted_open_window() {
    let json = with_field(
        "weeklyAvailability",
        serde_json::json!([
            { "barberId": "b1", "dayOfWeek": "MONDAY", "startTime": "18:00", "endTime": "09:00", "isAvailable": true }
        ]),
    );
    let err = Dataset::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("MONDAY"), "message: {}", err);
}

#[test]
fn rejects_references_to_unknown_barbers() {
    let json = with_field(
        "daysOff",
        serde_json::json!([{ "barberId": "ghost", "date": "2026-03-16" }]),
    );
    assert!(Dataset::from_json(&json).is_err());
}

#[test]
fn rejects_zero_length_services() {
    let json = with_field(
        "services",
        serde_json::json!([{ "id": "cut", "name": "Haircut", "durationMinutes": 0 }]),
    );
    assert!(Dataset::from_json(&json).is_err());
}

#[test]
fn rejects_malformed_times() {
    let json = with_field(
        "weeklyAvailability",
        serde_json::json!([
            { "barberId": "b1", "dayOfWeek": "MONDAY", "startTime": "9am", "endTime": "18:00", "isAvailable": true }
        ]),
    );
    assert!(matches!(Dataset::from_json(&json), Err(SlotError::InvalidDataset(_))));
}

#[test]
fn empty_document_is_a_valid_empty_dataset() {
    let dataset = Dataset::from_json("{}").unwrap();
    assert_eq!(dataset, Dataset::default());
}
