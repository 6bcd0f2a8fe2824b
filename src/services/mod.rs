pub mod agenda;
pub mod platform;
pub mod roster;
pub mod schedule;
