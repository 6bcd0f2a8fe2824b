use chrono::{Datelike, NaiveDate};

use super::clock::{format_minutes, parse_clock_time};
use crate::models::OpeningHoursEntry;

/// The open window for one date, in minutes since midnight. End is
/// exclusive: a branch open "9:00 am - 5:00 pm" takes its last 15-minute
/// slot at 4:45 pm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenInterval {
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl OpenInterval {
    /// 12-hour display strings, e.g. ("9:00 am", "5:00 pm").
    pub fn display(&self) -> (String, String) {
        (format_minutes(self.start_minutes), format_minutes(self.end_minutes))
    }
}

// Canonical weekday order for branch data, Monday = 0.
const DAY_ORDER: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

fn day_index(token: &str) -> Option<u32> {
    let token = token.trim().to_lowercase();
    let prefix = token.get(..3)?;
    DAY_ORDER.iter().position(|d| *d == prefix).map(|i| i as u32)
}

/// Parse a `day` field into an inclusive weekday-index span. Single days
/// ("Wednesday", "wed") become a one-day span; ranges use "X - Y" or
/// "X to Y". A reversed span matches nothing — there is no week wraparound.
fn day_span(text: &str) -> Option<(u32, u32)> {
    let lower = text.trim().to_lowercase();
    let (start, end) = if let Some((a, b)) = lower.split_once(" to ") {
        (a, b)
    } else if let Some((a, b)) = lower.split_once('-') {
        (a, b)
    } else {
        let index = day_index(&lower)?;
        return Some((index, index));
    };
    Some((day_index(start)?, day_index(end)?))
}

/// Resolve a branch's open interval for a date. The first entry whose day or
/// day range contains the date's weekday wins; no match means the branch is
/// closed that day.
pub fn resolve(entries: &[OpeningHoursEntry], date: NaiveDate) -> Option<OpenInterval> {
    let today = date.weekday().num_days_from_monday();
    for entry in entries {
        let Some((start, end)) = day_span(&entry.day) else {
            tracing::warn!(day = %entry.day, "unrecognized opening-hours day, skipping entry");
            continue;
        };
        if start <= today && today <= end {
            return Some(OpenInterval {
                start_minutes: parse_clock_time(&entry.from),
                end_minutes: parse_clock_time(&entry.to),
            });
        }
    }
    None
}
