use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use super::{normalize, NewBooking, PlatformApi};
use crate::models::{Booking, Branch, Service, Staff};
use crate::services::schedule::clock::date_key;

pub struct HttpPlatform {
    base_url: String,
    api_token: String,
    client: reqwest::Client,
}

impl HttpPlatform {
    pub fn new(base_url: String, api_token: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json(&self, path: &str) -> anyhow::Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .with_context(|| format!("failed to call platform API: {path}"))?;

        let status = resp.status();
        let data: Value = resp
            .json()
            .await
            .with_context(|| format!("failed to parse platform response: {path}"))?;

        if !status.is_success() {
            anyhow::bail!("platform API error ({status}): {data}");
        }
        Ok(data)
    }
}

#[async_trait]
impl PlatformApi for HttpPlatform {
    async fn fetch_branch(&self, branch_id: &str) -> anyhow::Result<Branch> {
        let data = self.get_json(&format!("/branches/{branch_id}")).await?;
        serde_json::from_value(data).context("unexpected branch payload")
    }

    async fn fetch_staff(&self, branch_id: &str) -> anyhow::Result<Vec<Staff>> {
        let data = self.get_json(&format!("/branches/{branch_id}/staff")).await?;
        serde_json::from_value(data).context("unexpected staff payload")
    }

    async fn fetch_services(&self, branch_id: &str) -> anyhow::Result<Vec<Service>> {
        let data = self
            .get_json(&format!("/branches/{branch_id}/services"))
            .await?;
        serde_json::from_value(data).context("unexpected service payload")
    }

    async fn fetch_bookings(&self, branch_id: &str, date: NaiveDate) -> anyhow::Result<Vec<Booking>> {
        let data = self
            .get_json(&format!("/branches/{branch_id}/bookings?date={}", date_key(date)))
            .await?;
        // Booking payloads are not contractually shaped; run them through
        // the tolerant adapter rather than serde derives.
        Ok(normalize::bookings_from_payload(&data))
    }

    async fn create_booking(&self, booking: &NewBooking) -> anyhow::Result<()> {
        let url = format!("{}/bookings", self.base_url);
        self.client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(booking)
            .send()
            .await
            .context("failed to submit booking to platform")?
            .error_for_status()
            .context("platform rejected booking")?;
        Ok(())
    }
}
