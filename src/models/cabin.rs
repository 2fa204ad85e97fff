//! Cabin configuration entry.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::utils::url::cabin_id_from_url;

/// A single cabin tracked by the watcher.
///
/// Static and read-only for the duration of a run. The booking id is not
/// stored directly; it is derived from the final path segment of the
/// booking URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CabinConfig {
    /// Display name (e.g. "Stallen")
    pub name: String,

    /// Booking page URL (e.g. "https://hyttebestilling.dnt.no/hytte/101297")
    pub url: String,

    /// Free-text description shown in the cabin roster
    #[serde(default)]
    pub description: String,
}

impl CabinConfig {
    /// Derive the booking id from the cabin URL.
    ///
    /// The id is the final path segment after stripping a trailing slash.
    /// A URL with no usable segment is a configuration error.
    pub fn id(&self) -> Result<String> {
        cabin_id_from_url(&self.url).ok_or_else(|| {
            AppError::config(format!(
                "Cabin '{}' has no id in URL '{}'",
                self.name, self.url
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabin(url: &str) -> CabinConfig {
        CabinConfig {
            name: "Stallen".to_string(),
            url: url.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_id_from_url() {
        let c = cabin("https://hyttebestilling.dnt.no/hytte/101297");
        assert_eq!(c.id().unwrap(), "101297");
    }

    #[test]
    fn test_id_ignores_trailing_slash() {
        let c = cabin("https://hyttebestilling.dnt.no/hytte/101297/");
        assert_eq!(c.id().unwrap(), "101297");
    }

    #[test]
    fn test_id_missing_is_config_error() {
        let c = cabin("https://hyttebestilling.dnt.no/");
        assert!(matches!(c.id(), Err(AppError::Config(_))));
    }
}
