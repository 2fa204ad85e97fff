//! Weekend detection.
//!
//! Finds Fridays whose following Saturday and Sunday are also present in a
//! date collection. Pure function of its input, so it can be reused
//! unchanged against an Added set to spot newly opened weekends.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// The only recognized weekend pattern.
pub const WEEKEND_LABEL: &str = "Fri-Sun";

/// A Friday anchoring a fully available Friday-through-Sunday block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendWindow {
    /// The Friday opening the weekend
    pub friday: NaiveDate,

    /// Pattern tag, always [`WEEKEND_LABEL`]
    pub label: &'static str,
}

impl WeekendWindow {
    /// The Saturday of this weekend.
    pub fn saturday(&self) -> NaiveDate {
        self.friday + Days::new(1)
    }

    /// The Sunday of this weekend.
    pub fn sunday(&self) -> NaiveDate {
        self.friday + Days::new(2)
    }
}

/// Find fully available weekends in a date collection.
///
/// Accepts full timestamps; only the first 10 characters (the date
/// portion) are significant. Unparseable entries are dropped. A Friday
/// qualifies only when both Friday+1 and Friday+2 are members of the same
/// collection. Output is ascending by Friday.
pub fn find_weekends<S: AsRef<str>>(dates: &[S]) -> Vec<WeekendWindow> {
    let members: BTreeSet<NaiveDate> = dates.iter().filter_map(|d| normalize(d.as_ref())).collect();

    members
        .iter()
        .filter(|date| date.weekday() == Weekday::Fri)
        .filter(|friday| {
            members.contains(&(**friday + Days::new(1)))
                && members.contains(&(**friday + Days::new(2)))
        })
        .map(|friday| WeekendWindow {
            friday: *friday,
            label: WEEKEND_LABEL,
        })
        .collect()
}

/// Normalize a date identifier to its date-only value.
fn normalize(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_full_weekend_detected() {
        // 2022-01-07 is a Friday
        let dates = ["2022-01-07", "2022-01-08", "2022-01-09"];
        let weekends = find_weekends(&dates);

        assert_eq!(weekends.len(), 1);
        assert_eq!(weekends[0].friday, date("2022-01-07"));
        assert_eq!(weekends[0].label, "Fri-Sun");
    }

    #[test]
    fn test_missing_sunday_disqualifies() {
        let dates = ["2022-01-07", "2022-01-08"];
        assert!(find_weekends(&dates).is_empty());
    }

    #[test]
    fn test_missing_saturday_disqualifies() {
        let dates = ["2022-01-07", "2022-01-09"];
        assert!(find_weekends(&dates).is_empty());
    }

    #[test]
    fn test_saturday_sunday_without_friday() {
        let dates = ["2022-01-08", "2022-01-09"];
        assert!(find_weekends(&dates).is_empty());
    }

    #[test]
    fn test_timestamps_are_normalized() {
        let dates = [
            "2022-01-07T12:00:00Z",
            "2022-01-08T00:00:00Z",
            "2022-01-09T23:59:59Z",
        ];
        let weekends = find_weekends(&dates);
        assert_eq!(weekends.len(), 1);
        assert_eq!(weekends[0].friday, date("2022-01-07"));
    }

    #[test]
    fn test_output_ascending_regardless_of_input_order() {
        let dates = [
            "2022-01-16", "2022-01-15", "2022-01-14", // second weekend, reversed
            "2022-01-09", "2022-01-08", "2022-01-07", // first weekend, reversed
        ];
        let weekends = find_weekends(&dates);

        assert_eq!(weekends.len(), 2);
        assert_eq!(weekends[0].friday, date("2022-01-07"));
        assert_eq!(weekends[1].friday, date("2022-01-14"));
    }

    #[test]
    fn test_duplicates_and_garbage_ignored() {
        let dates = ["2022-01-07", "2022-01-07", "not-a-date", "2022-01-08", "2022-01-09"];
        assert_eq!(find_weekends(&dates).len(), 1);
    }

    #[test]
    fn test_weekend_spanning_month_boundary() {
        // 2022-04-29 is a Friday; the weekend runs into May
        let dates = ["2022-04-29", "2022-04-30", "2022-05-01"];
        let weekends = find_weekends(&dates);
        assert_eq!(weekends.len(), 1);
        assert_eq!(weekends[0].sunday(), date("2022-05-01"));
    }

    #[test]
    fn test_saturday_and_sunday_accessors() {
        let weekends = find_weekends(&["2022-01-07", "2022-01-08", "2022-01-09"]);
        assert_eq!(weekends[0].saturday(), date("2022-01-08"));
        assert_eq!(weekends[0].sunday(), date("2022-01-09"));
    }
}
