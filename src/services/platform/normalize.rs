//! Booking payloads arrive in whatever shape the platform of the day emits:
//! snake_case or camelCase keys, ids flat or nested under customer/staff
//! objects, numbers where strings are expected. This adapter maps them to
//! `Booking` before anything else sees them; the scheduling code never
//! touches a raw payload.
//!
//! Field priority, first hit wins: snake_case key, then camelCase key, then
//! the nested object form (`customer.id`, `staff.id`, `service.id`).

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::models::{BookedService, Booking, BookingStatus};

/// Accepts a bare array or an object wrapping one under `bookings`/`data`.
/// Malformed records are skipped with a warning; one bad booking must not
/// blank the day it belongs to.
pub fn bookings_from_payload(payload: &Value) -> Vec<Booking> {
    let items = payload
        .as_array()
        .or_else(|| payload.get("bookings").and_then(Value::as_array))
        .or_else(|| payload.get("data").and_then(Value::as_array));

    let Some(items) = items else {
        tracing::warn!("booking payload is not a list, dropping it");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let booking = booking_from_value(item);
            if booking.is_none() {
                tracing::warn!(payload = %item, "skipping malformed booking record");
            }
            booking
        })
        .collect()
}

pub fn booking_from_value(value: &Value) -> Option<Booking> {
    let id = string_at(value, &["id", "booking_id", "bookingId"])?;
    let scheduled_on = string_at(value, &["scheduled_on", "scheduledOn", "date_time", "dateTime"])
        .and_then(|s| parse_local_datetime(&s))?;

    let customer_id = string_at(value, &["customer_id", "customerId"])
        .or_else(|| nested_string(value, "customer", "id"));
    let customer_name = string_at(value, &["customer_name", "customerName"])
        .or_else(|| nested_string(value, "customer", "name"))
        .or_else(|| nested_string(value, "customer", "first_name"));
    let staff_id =
        string_at(value, &["staff_id", "staffId"]).or_else(|| nested_string(value, "staff", "id"));

    let services = service_lines(value);
    let duration_minutes = u32_at(value, &["duration", "duration_minutes", "durationMinutes"])
        .unwrap_or_else(|| services.iter().map(|s| s.duration_minutes).sum());

    let status = string_at(value, &["status"])
        .map(|s| BookingStatus::from_str(&s))
        .unwrap_or(BookingStatus::Pending);

    Some(Booking {
        id,
        customer_id,
        customer_name,
        staff_id,
        scheduled_on,
        duration_minutes,
        services,
        status,
    })
}

fn service_lines(value: &Value) -> Vec<BookedService> {
    let Some(items) = value.get("services").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let service_id = string_at(item, &["service_id", "serviceId", "id"])
                .or_else(|| nested_string(item, "service", "id"))?;
            let staff_id = string_at(item, &["staff_id", "staffId"])
                .or_else(|| nested_string(item, "staff", "id"));
            let duration_minutes =
                u32_at(item, &["duration", "duration_minutes", "durationMinutes"])?;
            Some(BookedService {
                service_id,
                staff_id,
                duration_minutes,
            })
        })
        .collect()
}

fn parse_local_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

fn string_at(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        // Numeric ids show up too; keep them as strings.
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn u32_at(value: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|key| match value.get(key) {
        Some(Value::Number(n)) => n.as_u64().map(|n| n as u32),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn nested_string(value: &Value, object: &str, key: &str) -> Option<String> {
    value.get(object).and_then(|obj| string_at(obj, &[key]))
}
