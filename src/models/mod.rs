pub mod booking;
pub mod branch;
pub mod service;
pub mod staff;

pub use booking::{BookedService, Booking, BookingStatus, SubBooking};
pub use branch::{Branch, OpeningHoursEntry};
pub use service::Service;
pub use staff::{Staff, WorkingHoursEntry};
