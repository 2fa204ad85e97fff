//! Availability calendar fetcher.
//!
//! Thin client for the booking API. Fetch failures are reported to the
//! caller; orchestration treats them as "no data this run" for the cabin
//! and moves on.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{AvailabilityResponse, WatcherConfig};

/// Trait for fetching one cabin's availability calendar.
#[async_trait]
pub trait AvailabilityFetcher: Send + Sync {
    /// Fetch the availability calendar for a cabin over a date range
    /// (ISO dates, inclusive).
    async fn fetch(&self, cabin_id: &str, from_date: &str, to_date: &str)
        -> Result<AvailabilityResponse>;
}

/// HTTP client against the booking availability endpoint.
pub struct AvailabilityClient {
    base_url: String,
    client: Client,
}

impl AvailabilityClient {
    /// Create a new client from watcher settings.
    pub fn new(config: &WatcherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.api_base_url.clone(),
            client,
        })
    }
}

#[async_trait]
impl AvailabilityFetcher for AvailabilityClient {
    async fn fetch(
        &self,
        cabin_id: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<AvailabilityResponse> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("cabinId", cabin_id),
                ("fromDate", from_date),
                ("toDate", to_date),
            ])
            .send()
            .await
            .map_err(|e| AppError::fetch(cabin_id, e))?;

        let response = response
            .error_for_status()
            .map_err(|e| AppError::fetch(cabin_id, e))?;

        let value: Value = response
            .json()
            .await
            .map_err(|e| AppError::fetch(cabin_id, e))?;

        Ok(AvailabilityResponse::from_value(value))
    }
}
