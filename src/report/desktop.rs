//! Desktop presenter.
//!
//! Same statistics rendering as the console presenter, plus system
//! notifications through the macOS Notification Center (`osascript`).
//! On other platforms notifications fall back to the log.

use crate::models::CabinConfig;
use crate::report::{AvailabilityStats, ConsolePresenter, Presenter};

/// Console rendering with desktop notification delivery.
#[derive(Debug, Clone, Default)]
pub struct DesktopPresenter {
    console: ConsolePresenter,
}

impl DesktopPresenter {
    pub fn new() -> Self {
        Self {
            console: ConsolePresenter::new(),
        }
    }
}

impl Presenter for DesktopPresenter {
    fn render_stats(&self, cabin: &CabinConfig, stats: &AvailabilityStats) {
        self.console.render_stats(cabin, stats);
    }

    #[cfg(target_os = "macos")]
    fn notify(&self, title: &str, message: &str) {
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape(message),
            escape(title)
        );

        let result = std::process::Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .status();

        match result {
            Ok(status) if status.success() => {}
            Ok(status) => log::warn!("osascript exited with {status}"),
            Err(e) => log::warn!("Failed to run osascript: {e}"),
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn notify(&self, title: &str, message: &str) {
        self.console.notify(title, message);
    }
}

/// Escape a string for embedding in an AppleScript double-quoted literal.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
