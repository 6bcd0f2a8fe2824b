use serde::Serialize;

use super::opening_hours::OpenInterval;

/// Booking grid granularity.
pub const SLOT_STEP_MINUTES: u32 = 15;

/// Fixed business window for week/month grid rows, independent of any
/// branch's actual opening hours.
pub const GRID_OPEN_MINUTES: u32 = 8 * 60;
pub const GRID_CLOSE_MINUTES: u32 = 20 * 60;

/// A candidate start time for a new booking. Derived per render, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start_minutes: u32,
    pub duration_minutes: u32,
}

/// The ordered 15-minute slot starts inside an open interval. Every slot
/// start is strictly before the closing time.
pub fn booking_slots(open: &OpenInterval) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut start = open.start_minutes;
    while start < open.end_minutes {
        slots.push(TimeSlot {
            start_minutes: start,
            duration_minutes: SLOT_STEP_MINUTES,
        });
        start += SLOT_STEP_MINUTES;
    }
    slots
}

/// Slots for a date that may be closed. A closed day yields no slots;
/// callers surface the closed state instead of an unexplained empty grid.
pub fn day_slots(open: Option<&OpenInterval>) -> Vec<TimeSlot> {
    open.map(booking_slots).unwrap_or_default()
}

/// Hour markers for grid views: 08:00, 09:00, … 19:00, each labelling the
/// hour row it starts.
pub fn hour_marks() -> Vec<u32> {
    (GRID_OPEN_MINUTES / 60..GRID_CLOSE_MINUTES / 60)
        .map(|hour| hour * 60)
        .collect()
}
