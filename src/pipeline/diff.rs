//! Diff calculation between availability snapshots.
//!
//! Computes the difference between the two most recent snapshots to
//! identify newly opened and newly gone dates for notification dispatch.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Added/Removed date sets between two snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Dates present in the newer snapshot but not the older
    pub added: Vec<String>,
    /// Dates present in the older snapshot but not the newer
    pub removed: Vec<String>,
}

impl DiffResult {
    /// Check if there are any changes.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }

    /// Get the total number of changes.
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len()
    }
}

/// Calculate the diff between an older and a newer date collection.
///
/// Inputs are treated as sets: source ordering and duplicate entries are
/// irrelevant. Output is sorted ascending for deterministic reporting.
/// Both sides empty, or equal, is "no change" rather than an error.
pub fn calculate_diff<S: AsRef<str>>(older: &[S], newer: &[S]) -> DiffResult {
    let old_set: BTreeSet<&str> = older.iter().map(|d| d.as_ref()).collect();
    let new_set: BTreeSet<&str> = newer.iter().map(|d| d.as_ref()).collect();

    let added = new_set
        .difference(&old_set)
        .map(|d| d.to_string())
        .collect();

    let removed = old_set
        .difference(&new_set)
        .map(|d| d.to_string())
        .collect();

    DiffResult { added, removed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_changes() {
        let dates = ["2022-01-01", "2022-01-02"];
        let result = calculate_diff(&dates, &dates);

        assert!(!result.has_changes());
        assert_eq!(result.change_count(), 0);
    }

    #[test]
    fn test_added_and_removed() {
        let older = ["2022-01-01", "2022-01-02"];
        let newer = ["2022-01-02", "2022-01-03"];

        let result = calculate_diff(&older, &newer);
        assert_eq!(result.added, vec!["2022-01-03"]);
        assert_eq!(result.removed, vec!["2022-01-01"]);
    }

    #[test]
    fn test_added_and_removed_are_disjoint() {
        let older = ["2022-01-01", "2022-01-02", "2022-01-05"];
        let newer = ["2022-01-02", "2022-01-03", "2022-01-04"];

        let result = calculate_diff(&older, &newer);
        for date in &result.added {
            assert!(!result.removed.contains(date));
        }
    }

    #[test]
    fn test_diff_is_antisymmetric() {
        let older = ["2022-01-01", "2022-01-02"];
        let newer = ["2022-01-02", "2022-01-03"];

        let forward = calculate_diff(&older, &newer);
        let backward = calculate_diff(&newer, &older);

        assert_eq!(forward.added, backward.removed);
        assert_eq!(forward.removed, backward.added);
    }

    #[test]
    fn test_duplicates_collapse() {
        let older = ["2022-01-01", "2022-01-01"];
        let newer = ["2022-01-01", "2022-01-02", "2022-01-02"];

        let result = calculate_diff(&older, &newer);
        assert_eq!(result.added, vec!["2022-01-02"]);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_empty_to_full() {
        let older: [&str; 0] = [];
        let newer = ["2022-01-01"];

        let result = calculate_diff(&older, &newer);
        assert_eq!(result.added, vec!["2022-01-01"]);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_full_to_empty() {
        let older = ["2022-01-01"];
        let newer: [&str; 0] = [];

        let result = calculate_diff(&older, &newer);
        assert!(result.added.is_empty());
        assert_eq!(result.removed, vec!["2022-01-01"]);
    }

    #[test]
    fn test_output_sorted() {
        let older: [&str; 0] = [];
        let newer = ["2022-03-01", "2022-01-01", "2022-02-01"];

        let result = calculate_diff(&older, &newer);
        assert_eq!(result.added, vec!["2022-01-01", "2022-02-01", "2022-03-01"]);
    }
}
