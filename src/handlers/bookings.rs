use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::SubBooking;
use crate::services::platform::NewBooking;
use crate::services::schedule::clock::{
    date_key, format_minutes, format_minutes_24h, parse_date_key, try_parse_clock_time,
};
use crate::services::schedule::sequence::{self, SelectedService};
use crate::services::schedule::{occupancy, opening_hours, working_hours};
use crate::state::AppState;

// ── Preview ──

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub start_time: String,
    pub services: Vec<SelectedService>,
}

#[derive(Serialize)]
pub struct SubAppointmentView {
    pub service_id: String,
    pub staff_id: Option<String>,
    pub starts_at: String,
    pub ends_at: String,
    pub duration_minutes: u32,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub sub_appointments: Vec<SubAppointmentView>,
    pub total_duration_minutes: u32,
    pub total_price: i64,
    pub starts_at: String,
    pub ends_at: String,
}

/// POST /api/bookings/preview — sequence the selected services without
/// submitting anything. User-entered times are validated strictly; the
/// 10:00 am fallback is reserved for platform data.
pub async fn preview_booking(
    Json(body): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    if body.services.is_empty() {
        return Err(AppError::BadRequest("select at least one service".to_string()));
    }
    let start = try_parse_clock_time(&body.start_time)
        .ok_or_else(|| AppError::BadRequest(format!("invalid start time: {}", body.start_time)))?;

    Ok(Json(preview(&body.services, start)))
}

fn preview(services: &[SelectedService], start: u32) -> PreviewResponse {
    let subs = sequence::sequence(services, start);
    let total = sequence::total_duration(services);

    PreviewResponse {
        sub_appointments: subs
            .iter()
            .map(|sub| SubAppointmentView {
                service_id: sub.service_id.clone(),
                staff_id: sub.staff_id.clone(),
                starts_at: format_minutes(sub.start_minutes),
                ends_at: format_minutes(sub.start_minutes + sub.duration_minutes),
                duration_minutes: sub.duration_minutes,
            })
            .collect(),
        total_duration_minutes: total,
        total_price: sequence::total_price(services),
        starts_at: format_minutes(start),
        ends_at: format_minutes(start + total),
    }
}

// ── Create ──

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub branch_id: String,
    pub staff_id: Option<String>,
    pub customer_id: Option<String>,
    pub date: String,
    pub start_time: String,
    pub services: Vec<SelectedService>,
}

#[derive(Serialize)]
pub struct CreateBookingResponse {
    pub booking_id: String,
    #[serde(flatten)]
    pub schedule: PreviewResponse,
}

/// POST /api/bookings — validate against opening hours, working hours, and
/// existing occupancy, then forward to the platform.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    if body.services.is_empty() {
        return Err(AppError::BadRequest("select at least one service".to_string()));
    }
    let date = parse_date_key(&body.date)
        .ok_or_else(|| AppError::BadRequest(format!("invalid date: {}", body.date)))?;
    let start = try_parse_clock_time(&body.start_time)
        .ok_or_else(|| AppError::BadRequest(format!("invalid start time: {}", body.start_time)))?;

    let schedule = state
        .schedule
        .branch_schedule(state.platform.as_ref(), &body.branch_id)
        .await?;

    let open = opening_hours::resolve(&schedule.branch.opening_hours, date)
        .ok_or_else(|| AppError::Conflict(format!("branch is closed on {}", body.date)))?;

    let total = sequence::total_duration(&body.services);
    let end = start + total;
    if start < open.start_minutes || end > open.end_minutes {
        let (opens, closes) = open.display();
        return Err(AppError::Conflict(format!(
            "booking falls outside opening hours ({opens} - {closes})"
        )));
    }

    if let Some(staff_id) = body.staff_id.as_deref() {
        let staff = schedule
            .staff_member(staff_id)
            .ok_or_else(|| AppError::NotFound(format!("unknown staff: {staff_id}")))?;
        if !working_hours::works_on(&staff.working_hours, date) {
            return Err(AppError::Conflict(format!(
                "{} does not work on {}",
                staff.name, body.date
            )));
        }

        // No degrade here: a fetch failure must not look like a free day.
        // Double-booking is worse than asking the user to retry.
        let bookings = state
            .platform
            .fetch_bookings(&body.branch_id, date)
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;
        let subs: Vec<SubBooking> = bookings.iter().flat_map(|b| b.sub_bookings()).collect();
        let ranges = occupancy::occupied_ranges(
            subs.iter().filter(|sub| sub.staff_id.as_deref() == Some(staff_id)),
        );
        if occupancy::range_conflicts(&ranges, start, end) {
            return Err(AppError::Conflict("that time is already booked".to_string()));
        }
    }

    let booking_id = Uuid::new_v4().to_string();
    let new_booking = NewBooking {
        id: booking_id.clone(),
        branch_id: body.branch_id.clone(),
        customer_id: body.customer_id.clone(),
        staff_id: body.staff_id.clone(),
        scheduled_on: format!("{} {}:00", date_key(date), format_minutes_24h(start)),
        duration_minutes: total,
        services: body.services.clone(),
    };
    state
        .platform
        .create_booking(&new_booking)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    tracing::info!(booking_id = %booking_id, date = %body.date, services = body.services.len(), "booking submitted");

    Ok(Json(CreateBookingResponse {
        booking_id,
        schedule: preview(&body.services, start),
    }))
}
