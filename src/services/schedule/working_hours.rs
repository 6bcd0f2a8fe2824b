use chrono::{Datelike, NaiveDate};

use crate::models::WorkingHoursEntry;

/// Whether a staff member works on a date.
///
/// The staff wire format counts weekdays from Sunday = 0, unlike the
/// Monday = 0 convention used for branch opening hours; the conversion lives
/// here so the mismatch never leaves this module. An entry's presence is the
/// whole signal — the platform only sends entries for worked days, so
/// `is_working` is not consulted. Staff with no entries at all are legacy
/// records and stay bookable every day.
pub fn works_on(entries: &[WorkingHoursEntry], date: NaiveDate) -> bool {
    if entries.is_empty() {
        return true;
    }
    let wire_day = date.weekday().num_days_from_sunday() as u8;
    entries.iter().any(|entry| entry.day == wire_day)
}
