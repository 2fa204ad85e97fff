//! Pipeline stages for availability checks.
//!
//! - `extract`: raw payload → available date identifiers
//! - `weekend`: date collection → qualifying Friday anchors
//! - `diff`: two snapshots → Added/Removed date sets
//! - `check`: per-cabin orchestration, batch runner, watch loop

pub mod check;
pub mod diff;
pub mod extract;
pub mod weekend;

pub use check::{run_batch, run_check, run_watch, BatchSummary, CheckOutcome};
pub use diff::{calculate_diff, DiffResult};
pub use extract::extract_available_dates;
pub use weekend::{find_weekends, WeekendWindow, WEEKEND_LABEL};
