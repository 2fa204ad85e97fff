//! Service layer for the watcher application.
//!
//! This module contains the external collaborators:
//! - Calendar fetcher (booking API client)

pub mod availability;

pub use availability::{AvailabilityClient, AvailabilityFetcher};
