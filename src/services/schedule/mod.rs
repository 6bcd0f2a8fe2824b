//! The availability & scheduling engine. Everything in here is pure and
//! synchronous: plain schedule data in, slot lists / conflict verdicts /
//! layout geometry out. Fetching and caching live next door in `platform`,
//! `roster`, and `agenda`.

pub mod clock;
pub mod layout;
pub mod occupancy;
pub mod opening_hours;
pub mod sequence;
pub mod slots;
pub mod working_hours;
