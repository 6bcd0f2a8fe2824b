use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, SubBooking};
use crate::services::agenda;
use crate::services::schedule::clock::{date_key, format_minutes, parse_date_key};
use crate::services::schedule::{layout, occupancy, opening_hours, slots, working_hours};
use crate::state::AppState;

/// Longest date span a grid request may ask for (two month pages).
const MAX_GRID_DAYS: usize = 62;

// ── Day view ──

#[derive(Deserialize)]
pub struct DayQuery {
    pub branch_id: String,
    pub staff_id: Option<String>,
    pub date: String,
}

#[derive(Serialize)]
pub struct SlotView {
    pub start_minutes: u32,
    pub time: String,
    pub available: bool,
}

#[derive(Serialize)]
pub struct DayViewResponse {
    pub date: String,
    pub closed: bool,
    pub opens: Option<String>,
    pub closes: Option<String>,
    pub staff_working: bool,
    pub slots: Vec<SlotView>,
}

/// GET /api/calendar/day — the 15-minute booking grid for one date.
/// A closed branch day or a non-working staff day returns no slots, with
/// the flags telling the UI which state to present.
pub async fn day_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayViewResponse>, AppError> {
    let date = parse_date_key(&query.date)
        .ok_or_else(|| AppError::BadRequest(format!("invalid date: {}", query.date)))?;

    let schedule = state
        .schedule
        .branch_schedule(state.platform.as_ref(), &query.branch_id)
        .await?;

    let Some(open) = opening_hours::resolve(&schedule.branch.opening_hours, date) else {
        return Ok(Json(DayViewResponse {
            date: date_key(date),
            closed: true,
            opens: None,
            closes: None,
            staff_working: false,
            slots: Vec::new(),
        }));
    };
    let (opens, closes) = open.display();

    let staff_working = match query.staff_id.as_deref() {
        Some(staff_id) => {
            let staff = schedule
                .staff_member(staff_id)
                .ok_or_else(|| AppError::NotFound(format!("unknown staff: {staff_id}")))?;
            working_hours::works_on(&staff.working_hours, date)
        }
        None => true,
    };
    if !staff_working {
        return Ok(Json(DayViewResponse {
            date: date_key(date),
            closed: false,
            opens: Some(opens),
            closes: Some(closes),
            staff_working: false,
            slots: Vec::new(),
        }));
    }

    // Single-day fetch goes through the same degrade path as ranged views:
    // a failed fetch renders an all-free day rather than an error page.
    let by_date = agenda::bookings_for_dates(state.platform.as_ref(), &query.branch_id, &[date]).await;
    let subs = day_sub_bookings(&by_date, date, query.staff_id.as_deref());
    let ranges = occupancy::occupied_ranges(&subs);

    let slot_views = slots::day_slots(Some(&open))
        .into_iter()
        .map(|slot| SlotView {
            start_minutes: slot.start_minutes,
            time: format_minutes(slot.start_minutes),
            available: !occupancy::minute_occupied(
                &ranges,
                open.start_minutes,
                open.end_minutes,
                slot.start_minutes,
            ),
        })
        .collect();

    Ok(Json(DayViewResponse {
        date: date_key(date),
        closed: false,
        opens: Some(opens),
        closes: Some(closes),
        staff_working: true,
        slots: slot_views,
    }))
}

// ── Grid view ──

#[derive(Deserialize)]
pub struct GridQuery {
    pub branch_id: String,
    pub staff_id: Option<String>,
    pub from: String,
    pub to: String,
}

#[derive(Serialize)]
pub struct BookingCard {
    pub booking_id: String,
    pub service_id: Option<String>,
    pub staff_id: Option<String>,
    pub starts_at: String,
    pub duration_minutes: u32,
    pub status: String,
    pub top_percent: f64,
    pub height_percent: f64,
    pub z_index: usize,
}

#[derive(Serialize)]
pub struct HourRow {
    pub start_minutes: u32,
    pub label: String,
    pub cards: Vec<BookingCard>,
}

#[derive(Serialize)]
pub struct GridDay {
    pub date: String,
    pub closed: bool,
    pub hours: Vec<HourRow>,
}

#[derive(Serialize)]
pub struct GridResponse {
    pub days: Vec<GridDay>,
}

/// GET /api/calendar/grid — hour rows over the fixed 08:00–20:00 business
/// window for each date in `[from, to]`. Cards carry the cell geometry; a
/// card belongs to the row owning its start minute only.
pub async fn grid_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GridQuery>,
) -> Result<Json<GridResponse>, AppError> {
    let from = parse_date_key(&query.from)
        .ok_or_else(|| AppError::BadRequest(format!("invalid date: {}", query.from)))?;
    let to = parse_date_key(&query.to)
        .ok_or_else(|| AppError::BadRequest(format!("invalid date: {}", query.to)))?;
    if to < from {
        return Err(AppError::BadRequest("date range is reversed".to_string()));
    }
    let dates = agenda::date_range(from, to);
    if dates.len() > MAX_GRID_DAYS {
        return Err(AppError::BadRequest(format!(
            "date range too long ({} days, max {MAX_GRID_DAYS})",
            dates.len()
        )));
    }

    let schedule = state
        .schedule
        .branch_schedule(state.platform.as_ref(), &query.branch_id)
        .await?;
    let by_date =
        agenda::bookings_for_dates(state.platform.as_ref(), &query.branch_id, &dates).await;

    let days = dates
        .iter()
        .map(|date| {
            if opening_hours::resolve(&schedule.branch.opening_hours, *date).is_none() {
                return GridDay {
                    date: date_key(*date),
                    closed: true,
                    hours: Vec::new(),
                };
            }

            let subs = day_sub_bookings(&by_date, *date, query.staff_id.as_deref());
            let hours = slots::hour_marks()
                .into_iter()
                .map(|cell_start| {
                    let cell_end = cell_start + layout::CELL_MINUTES;
                    let in_cell = occupancy::starts_in_window(&subs, cell_start, cell_end);
                    let spans: Vec<(u32, u32)> = in_cell
                        .iter()
                        .map(|sub| (sub.start_minutes(), sub.end_minutes()))
                        .collect();
                    let cards = in_cell
                        .iter()
                        .zip(layout::layout_cell(&spans, cell_start))
                        .map(|(sub, place)| BookingCard {
                            booking_id: sub.booking_id.clone(),
                            service_id: sub.service_id.clone(),
                            staff_id: sub.staff_id.clone(),
                            starts_at: format_minutes(sub.start_minutes()),
                            duration_minutes: sub.duration_minutes,
                            status: sub.status.as_str().to_string(),
                            top_percent: place.top_percent,
                            height_percent: place.height_percent,
                            z_index: place.z_index,
                        })
                        .collect();
                    HourRow {
                        start_minutes: cell_start,
                        label: format_minutes(cell_start),
                        cards,
                    }
                })
                .collect();

            GridDay {
                date: date_key(*date),
                closed: false,
                hours,
            }
        })
        .collect();

    Ok(Json(GridResponse { days }))
}

/// Materialize a date's bookings into sub-bookings, optionally narrowed to
/// one staff member. Filtering happens after materialization so a
/// multi-service booking split across staff lands on the right columns.
fn day_sub_bookings(
    by_date: &HashMap<NaiveDate, Vec<Booking>>,
    date: NaiveDate,
    staff_id: Option<&str>,
) -> Vec<SubBooking> {
    let bookings = by_date.get(&date).map(Vec::as_slice).unwrap_or_default();
    let mut subs: Vec<SubBooking> = bookings.iter().flat_map(|b| b.sub_bookings()).collect();
    if let Some(staff_id) = staff_id {
        subs.retain(|sub| sub.staff_id.as_deref() == Some(staff_id));
    }
    subs
}
