use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One service line inside a booking. `staff_id` overrides the booking-level
/// staff when a service is performed by someone else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedService {
    pub service_id: String,
    pub staff_id: Option<String>,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub staff_id: Option<String>,
    pub scheduled_on: NaiveDateTime,
    pub duration_minutes: u32,
    pub services: Vec<BookedService>,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Started,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Started => "started",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => BookingStatus::Confirmed,
            "started" | "in_progress" => BookingStatus::Started,
            "completed" | "done" => BookingStatus::Completed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            "no_show" | "noshow" | "no-show" => BookingStatus::NoShow,
            _ => BookingStatus::Pending,
        }
    }

    /// Whether a booking in this status still consumes its time range.
    pub fn occupies(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::NoShow)
    }
}

impl Booking {
    /// Start of the booking as minutes since local midnight.
    pub fn start_minutes(&self) -> u32 {
        self.scheduled_on.hour() * 60 + self.scheduled_on.minute()
    }

    pub fn end_minutes(&self) -> u32 {
        self.start_minutes() + self.duration_minutes
    }

    /// Materialize one sub-booking per service line, chained back to back
    /// from the booking start in line order. A booking without service lines
    /// yields itself as a single sub-booking.
    pub fn sub_bookings(&self) -> Vec<SubBooking> {
        if self.services.is_empty() {
            return vec![SubBooking {
                booking_id: self.id.clone(),
                service_id: None,
                staff_id: self.staff_id.clone(),
                scheduled_on: self.scheduled_on,
                duration_minutes: self.duration_minutes,
                status: self.status,
            }];
        }

        let mut elapsed: i64 = 0;
        self.services
            .iter()
            .map(|line| {
                let sub = SubBooking {
                    booking_id: self.id.clone(),
                    service_id: Some(line.service_id.clone()),
                    staff_id: line.staff_id.clone().or_else(|| self.staff_id.clone()),
                    scheduled_on: self.scheduled_on + Duration::minutes(elapsed),
                    duration_minutes: line.duration_minutes,
                    status: self.status,
                };
                elapsed += line.duration_minutes as i64;
                sub
            })
            .collect()
    }
}

/// One service's portion of a booking, with its own derived start. The
/// parent booking id ties the pieces back together.
#[derive(Debug, Clone, Serialize)]
pub struct SubBooking {
    pub booking_id: String,
    pub service_id: Option<String>,
    pub staff_id: Option<String>,
    pub scheduled_on: NaiveDateTime,
    pub duration_minutes: u32,
    pub status: BookingStatus,
}

impl SubBooking {
    pub fn start_minutes(&self) -> u32 {
        self.scheduled_on.hour() * 60 + self.scheduled_on.minute()
    }

    pub fn end_minutes(&self) -> u32 {
        self.start_minutes() + self.duration_minutes
    }
}
