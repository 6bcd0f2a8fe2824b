pub mod http;
pub mod normalize;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Booking, Branch, Service, Staff};
use crate::services::schedule::sequence::SelectedService;

/// A booking submission forwarded to the platform. `scheduled_on` is the
/// local timestamp string the platform expects, "YYYY-MM-DD HH:MM:SS".
#[derive(Debug, Clone, Serialize)]
pub struct NewBooking {
    pub id: String,
    pub branch_id: String,
    pub customer_id: Option<String>,
    pub staff_id: Option<String>,
    pub scheduled_on: String,
    pub duration_minutes: u32,
    pub services: Vec<SelectedService>,
}

/// The upstream booking platform. All persistence lives behind it; this
/// service only reads, normalizes, and submits.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    async fn fetch_branch(&self, branch_id: &str) -> anyhow::Result<Branch>;

    async fn fetch_staff(&self, branch_id: &str) -> anyhow::Result<Vec<Staff>>;

    async fn fetch_services(&self, branch_id: &str) -> anyhow::Result<Vec<Service>>;

    async fn fetch_bookings(&self, branch_id: &str, date: NaiveDate) -> anyhow::Result<Vec<Booking>>;

    async fn create_booking(&self, booking: &NewBooking) -> anyhow::Result<()>;
}
