// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

/// Extract the cabin booking id from a booking page URL.
///
/// The id is the final path segment after stripping a trailing slash.
/// Falls back to plain string splitting for values that do not parse as
/// absolute URLs.
///
/// # Examples
/// ```
/// use cabin_watcher::utils::url::cabin_id_from_url;
///
/// assert_eq!(
///     cabin_id_from_url("https://hyttebestilling.dnt.no/hytte/101297"),
///     Some("101297".to_string())
/// );
/// ```
pub fn cabin_id_from_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim_end_matches('/');

    if let Ok(parsed) = Url::parse(trimmed) {
        if let Some(segment) = parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        {
            return Some(segment.to_string());
        }
        return None;
    }

    trimmed
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_plain() {
        assert_eq!(
            cabin_id_from_url("https://hyttebestilling.dnt.no/hytte/101297"),
            Some("101297".to_string())
        );
    }

    #[test]
    fn test_extract_id_trailing_slash() {
        assert_eq!(
            cabin_id_from_url("https://hyttebestilling.dnt.no/hytte/101297/"),
            Some("101297".to_string())
        );
    }

    #[test]
    fn test_extract_id_domain_only() {
        assert_eq!(cabin_id_from_url("https://hyttebestilling.dnt.no/"), None);
    }

    #[test]
    fn test_extract_id_non_url() {
        assert_eq!(cabin_id_from_url("101297"), Some("101297".to_string()));
    }
}
