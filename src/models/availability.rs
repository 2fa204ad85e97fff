//! Availability calendar payload structures.
//!
//! Mirrors the booking API response:
//!
//! ```json
//! {
//!   "data": {
//!     "availabilityList": [
//!       { "date": "2026-01-01", "products": [{ "available": 1 }] }
//!     ]
//!   }
//! }
//! ```
//!
//! Every field defaults, so a payload missing any part of the expected
//! structure deserializes to "no availability" rather than an error.

use serde::Deserialize;
use serde_json::Value;

/// Top-level availability calendar response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub data: Option<AvailabilityData>,
}

/// Payload body holding the per-day availability list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityData {
    #[serde(default, rename = "availabilityList")]
    pub availability_list: Vec<DayAvailability>,
}

/// One calendar day with its bookable products.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayAvailability {
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub products: Vec<ProductAvailability>,
}

/// Remaining capacity for one bookable product on one day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductAvailability {
    /// Remaining capacity. A missing field counts as 0.
    #[serde(default)]
    pub available: f64,
}

impl AvailabilityResponse {
    /// Decode a raw JSON payload, degrading to an empty response when the
    /// structure does not match.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
