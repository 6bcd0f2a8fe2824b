use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use futures::future::join_all;

use crate::models::Booking;
use crate::services::platform::PlatformApi;

/// How many day fetches go out concurrently. Each wave is awaited fully
/// before the next starts, bounding load on the platform API during week
/// and month views.
pub const FETCH_BATCH_SIZE: usize = 5;

/// Inclusive date range, empty when `to` precedes `from`.
pub fn date_range(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = from;
    while current <= to {
        dates.push(current);
        current = current + Duration::days(1);
    }
    dates
}

/// Fetch bookings for each date, `FETCH_BATCH_SIZE` requests at a time. A
/// failed day degrades to an empty day — one bad request must not blank a
/// whole week view. There is no retry; the next user-triggered refresh is
/// the retry.
pub async fn bookings_for_dates(
    platform: &dyn PlatformApi,
    branch_id: &str,
    dates: &[NaiveDate],
) -> HashMap<NaiveDate, Vec<Booking>> {
    let mut by_date = HashMap::with_capacity(dates.len());
    for batch in dates.chunks(FETCH_BATCH_SIZE) {
        let fetches = batch
            .iter()
            .map(|date| platform.fetch_bookings(branch_id, *date));
        for (date, result) in batch.iter().zip(join_all(fetches).await) {
            let bookings = result.unwrap_or_else(|e| {
                tracing::warn!(error = %e, date = %date, "booking fetch failed, showing the day as empty");
                Vec::new()
            });
            by_date.insert(*date, bookings);
        }
    }
    by_date
}
