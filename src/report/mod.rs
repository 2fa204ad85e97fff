//! Reporting and notification capability.
//!
//! Orchestration is written once against the [`Presenter`] trait; each
//! front-end implements it with its own display binding. The console
//! presenter renders to stdout, the desktop presenter additionally posts
//! system notifications.

pub mod console;
pub mod desktop;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::CabinConfig;
use crate::pipeline::weekend::{find_weekends, WeekendWindow};

pub use console::ConsolePresenter;
pub use desktop::DesktopPresenter;

/// Presentation capability used by orchestration.
pub trait Presenter: Send + Sync {
    /// Render the per-cabin availability statistics.
    fn render_stats(&self, cabin: &CabinConfig, stats: &AvailabilityStats);

    /// Dispatch an alert with a title and a message body.
    fn notify(&self, title: &str, message: &str);
}

/// Statistics derived from one cabin's extracted dates.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityStats {
    /// Total available dates
    pub total: usize,

    /// Fully available Fri-Sun weekends
    pub weekends: Vec<WeekendWindow>,

    /// Available Saturdays (whether or not part of a full weekend)
    pub saturdays: Vec<NaiveDate>,

    /// Date counts per weekday, Monday first
    pub weekday_counts: [usize; 7],

    /// Earliest and latest available date
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl AvailabilityStats {
    /// Compute statistics from extracted date identifiers.
    pub fn from_dates<S: AsRef<str>>(dates: &[S]) -> Self {
        let parsed: Vec<NaiveDate> = dates
            .iter()
            .filter_map(|d| {
                let raw = d.as_ref();
                NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d").ok()
            })
            .collect();

        let mut weekday_counts = [0usize; 7];
        for date in &parsed {
            weekday_counts[date.weekday().num_days_from_monday() as usize] += 1;
        }

        let saturdays = parsed
            .iter()
            .copied()
            .filter(|d| d.weekday() == Weekday::Sat)
            .collect();

        let range = parsed
            .iter()
            .copied()
            .min()
            .zip(parsed.iter().copied().max());

        Self {
            total: parsed.len(),
            weekends: find_weekends(dates),
            saturdays,
            weekday_counts,
            range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_stats() {
        let stats = AvailabilityStats::from_dates::<&str>(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.weekends.is_empty());
        assert!(stats.range.is_none());
    }

    #[test]
    fn test_weekend_and_weekday_counts() {
        // Fri, Sat, Sun plus a Monday
        let dates = ["2022-01-07", "2022-01-08", "2022-01-09", "2022-01-10"];
        let stats = AvailabilityStats::from_dates(&dates);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.weekends.len(), 1);
        assert_eq!(stats.saturdays, vec![date("2022-01-08")]);
        assert_eq!(stats.weekday_counts[0], 1); // Monday
        assert_eq!(stats.weekday_counts[4], 1); // Friday
        assert_eq!(stats.weekday_counts[5], 1); // Saturday
        assert_eq!(stats.weekday_counts[6], 1); // Sunday
        assert_eq!(stats.range, Some((date("2022-01-07"), date("2022-01-10"))));
    }

    #[test]
    fn test_unparseable_dates_dropped() {
        let dates = ["2022-01-07", "garbage"];
        let stats = AvailabilityStats::from_dates(&dates);
        assert_eq!(stats.total, 1);
    }
}
