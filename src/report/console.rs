//! Console presenter.
//!
//! Renders per-cabin statistics to stdout, weekend availability first.
//! Notifications are written to the log instead of a system channel.

use crate::models::CabinConfig;
use crate::report::{AvailabilityStats, Presenter};

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Maximum standalone Saturdays listed before truncating.
const MAX_SATURDAYS_SHOWN: usize = 5;

/// Stdout-bound presenter.
#[derive(Debug, Clone, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn render_stats(&self, cabin: &CabinConfig, stats: &AvailabilityStats) {
        println!();
        println!("━━━ {} ━━━", cabin.name);

        if stats.total == 0 {
            println!("  No available dates found");
            return;
        }

        println!("  Total available dates: {}", stats.total);

        if !stats.weekends.is_empty() {
            println!("  {} full weekend(s) available:", stats.weekends.len());
            for weekend in &stats.weekends {
                println!(
                    "    • {} (Fri) – {} (Sun)",
                    weekend.friday,
                    weekend.sunday()
                );
            }
        } else {
            println!("  No full weekends available");

            if !stats.saturdays.is_empty() {
                println!(
                    "  {} Saturday(s) available (but not full weekends):",
                    stats.saturdays.len()
                );
                for saturday in stats.saturdays.iter().take(MAX_SATURDAYS_SHOWN) {
                    println!("    • {saturday}");
                }
                if stats.saturdays.len() > MAX_SATURDAYS_SHOWN {
                    println!("    … and {} more", stats.saturdays.len() - MAX_SATURDAYS_SHOWN);
                }
            }
        }

        let breakdown = WEEKDAY_NAMES
            .iter()
            .zip(stats.weekday_counts.iter())
            .map(|(name, count)| format!("{name}: {count}"))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("  Weekday breakdown: {breakdown}");

        if let Some((earliest, latest)) = stats.range {
            println!("  Range: {earliest} → {latest}");
        }
    }

    fn notify(&self, title: &str, message: &str) {
        log::info!("[notify] {title}: {message}");
    }
}
