use chrono::NaiveDate;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Fallback for unparsable time strings coming from platform data: 10:00 am.
/// Schedule records are externally sourced and occasionally mangled; one bad
/// field must not take down a whole calendar render.
pub const FALLBACK_START_MINUTES: u32 = 600;

/// Parse a wall-clock string into minutes since midnight. Accepts the
/// 12-hour form ("9:00 am", "12 pm") and the 24-hour forms "HH:MM" and
/// "HH:MM:SS". Returns `None` on anything else.
pub fn try_parse_clock_time(text: &str) -> Option<u32> {
    let text = text.trim().to_lowercase();

    if let Some(rest) = text.strip_suffix("am").or_else(|| text.strip_suffix("pm")) {
        let is_pm = text.ends_with("pm");
        let rest = rest.trim();
        let (hour_part, minute_part) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None => (rest, "0"),
        };
        let hour: u32 = hour_part.trim().parse().ok()?;
        let minute: u32 = minute_part.trim().parse().ok()?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }
        // 12 am is midnight, 12 pm is noon.
        let hour = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
        return Some(hour * 60 + minute);
    }

    let mut parts = text.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next()?.trim().parse().ok()?;
    if let Some(seconds) = parts.next() {
        let _: u32 = seconds.trim().parse().ok()?;
    }
    if parts.next().is_some() || hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Tolerant variant for platform-sourced schedule fields: falls back to
/// [`FALLBACK_START_MINUTES`] instead of failing.
pub fn parse_clock_time(text: &str) -> u32 {
    match try_parse_clock_time(text) {
        Some(minutes) => minutes,
        None => {
            tracing::warn!(time = %text, "unparsable time string, using 10:00 am");
            FALLBACK_START_MINUTES
        }
    }
}

/// Format minutes since midnight as "H:MM am"/"H:MM pm".
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hour = minutes / 60;
    let minute = minutes % 60;
    let suffix = if hour < 12 { "am" } else { "pm" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {suffix}")
}

/// Format minutes since midnight as 24-hour "HH:MM".
pub fn format_minutes_24h(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Calendar-date key "YYYY-MM-DD" from local date fields. `NaiveDate` has no
/// time zone attached, so this can never shift across a day boundary.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
