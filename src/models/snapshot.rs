//! Persisted availability snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One capture of a cabin's available dates at a point in time.
///
/// Snapshots are written once and never mutated. The storage key is
/// derived from `captured_at` with [`Snapshot::key`]; keys are fixed-width
/// and ordered most-significant field first so lexicographic order equals
/// chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    /// Booking id of the cabin this snapshot belongs to
    pub cabin_id: String,

    /// Capture time (UTC)
    pub captured_at: DateTime<Utc>,

    /// Number of available dates
    pub count: usize,

    /// Available dates in payload order (ISO date strings)
    pub dates: Vec<String>,
}

impl Snapshot {
    /// Create a snapshot captured now.
    pub fn new(cabin_id: impl Into<String>, dates: Vec<String>) -> Self {
        Self::at(cabin_id, Utc::now(), dates)
    }

    /// Create a snapshot with an explicit capture time.
    pub fn at(cabin_id: impl Into<String>, captured_at: DateTime<Utc>, dates: Vec<String>) -> Self {
        Self {
            cabin_id: cabin_id.into(),
            captured_at,
            count: dates.len(),
            dates,
        }
    }

    /// Storage key for this snapshot: `YYYYMMDDTHHMMSS`.
    pub fn key(&self) -> String {
        self.captured_at.format("%Y%m%dT%H%M%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_key_is_zero_padded() {
        let at = Utc.with_ymd_and_hms(2022, 3, 5, 7, 4, 9).unwrap();
        let snapshot = Snapshot::at("101297", at, vec![]);
        assert_eq!(snapshot.key(), "20220305T070409");
    }

    #[test]
    fn test_key_order_is_chronological() {
        let earlier = Snapshot::at(
            "101297",
            Utc.with_ymd_and_hms(2022, 1, 2, 23, 0, 0).unwrap(),
            vec![],
        );
        let later = Snapshot::at(
            "101297",
            Utc.with_ymd_and_hms(2022, 1, 3, 1, 0, 0).unwrap(),
            vec![],
        );
        assert!(earlier.key() < later.key());
    }

    #[test]
    fn test_count_tracks_dates() {
        let snapshot = Snapshot::new("101297", vec!["2022-01-01".into(), "2022-01-02".into()]);
        assert_eq!(snapshot.count, 2);
    }
}
