// src/models/mod.rs

//! Domain models for the watcher application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod availability;
mod cabin;
mod config;
mod snapshot;

// Re-export all public types
pub use availability::{AvailabilityData, AvailabilityResponse, DayAvailability, ProductAvailability};
pub use cabin::CabinConfig;
pub use config::{Config, HistoryConfig, WatcherConfig};
pub use snapshot::Snapshot;
