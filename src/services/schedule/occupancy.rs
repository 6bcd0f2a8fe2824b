use crate::models::SubBooking;

/// The minute interval consumed by an existing sub-booking, half-open:
/// `[start, end)`. A booking ending at minute M never blocks a new booking
/// starting at M.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedRange {
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl OccupiedRange {
    pub fn contains(&self, minute: u32) -> bool {
        self.start_minutes <= minute && minute < self.end_minutes
    }

    /// Whether the range touches the half-open window `[start, end)`: it
    /// starts inside it, ends inside it, or spans it entirely. The spanning
    /// case is what keeps bookings crossing an hour boundary visible.
    pub fn intersects(&self, window_start: u32, window_end: u32) -> bool {
        let starts_within = self.start_minutes >= window_start && self.start_minutes < window_end;
        let ends_within = self.end_minutes > window_start && self.end_minutes <= window_end;
        let spans = self.start_minutes < window_start && self.end_minutes > window_end;
        starts_within || ends_within || spans
    }
}

/// Occupied ranges for one staff member's day, derived fresh per render.
/// Cancelled and no-show bookings free their range.
pub fn occupied_ranges<'a, I>(subs: I) -> Vec<OccupiedRange>
where
    I: IntoIterator<Item = &'a SubBooking>,
{
    subs.into_iter()
        .filter(|sub| sub.status.occupies())
        .map(|sub| OccupiedRange {
            start_minutes: sub.start_minutes(),
            end_minutes: sub.end_minutes(),
        })
        .collect()
}

/// Whether minute `minute` is already taken, considering only ranges that
/// intersect the displayed window.
pub fn minute_occupied(ranges: &[OccupiedRange], window_start: u32, window_end: u32, minute: u32) -> bool {
    ranges
        .iter()
        .any(|range| range.intersects(window_start, window_end) && range.contains(minute))
}

/// Whether a candidate interval `[start, end)` overlaps any occupied range.
pub fn range_conflicts(ranges: &[OccupiedRange], start: u32, end: u32) -> bool {
    ranges
        .iter()
        .any(|range| range.start_minutes < end && range.end_minutes > start)
}

/// The sub-bookings whose start minute falls inside `[window_start,
/// window_end)`. Each booking card is rendered once, by the hour row that
/// owns its start — this is what prevents duplicates across hour boundaries.
pub fn starts_in_window<'a>(
    subs: &'a [SubBooking],
    window_start: u32,
    window_end: u32,
) -> Vec<&'a SubBooking> {
    subs.iter()
        .filter(|sub| {
            let start = sub.start_minutes();
            window_start <= start && start < window_end
        })
        .collect()
}
