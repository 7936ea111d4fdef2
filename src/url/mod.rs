//! URL validation, normalization, and host comparison
//!
//! Normalization here is deliberately permissive: the only hard failure is
//! an empty input. A missing scheme is auto-corrected by prepending
//! `https://`, matching what users paste into an address bar.

use crate::ScrapeError;
use url::Url;

/// A validated, fetchable URL
///
/// Guaranteed non-empty, whitespace-trimmed, and prefixed with `http://`
/// or `https://`. Construct via [`normalize_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates and normalizes a raw URL string
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Reject empty results with a validation error
/// 3. Prepend `https://` when no `http://`/`https://` prefix is present
///
/// No network access and no strict parse happens here; unreachable or
/// nonsensical hosts are discovered by the fetcher.
///
/// # Arguments
///
/// * `raw` - The URL string as received from the caller
///
/// # Returns
///
/// * `Ok(NormalizedUrl)` - Trimmed, scheme-prefixed URL
/// * `Err(ScrapeError::Validation)` - Input was empty or whitespace-only
///
/// # Examples
///
/// ```
/// use pagelens::url::normalize_url;
///
/// let url = normalize_url("  example.com/page  ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(raw: &str) -> Result<NormalizedUrl, ScrapeError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ScrapeError::Validation("URL cannot be empty".to_string()));
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(NormalizedUrl(trimmed.to_string()))
    } else {
        Ok(NormalizedUrl(format!("https://{}", trimmed)))
    }
}

/// Extracts the host of a URL string, if it parses and has one
pub fn host_of(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}

/// Checks whether a resolved link points outside the base URL's host
///
/// True only when both hosts are resolvable, the link host is non-empty,
/// and the hosts differ. Any parse failure yields false rather than an
/// error; external-ness is advisory metadata, not a gate.
pub fn is_external_url(link_url: &str, base_url: &str) -> bool {
    match (host_of(link_url), host_of(base_url)) {
        (Some(link_host), Some(base_host)) => !link_host.is_empty() && link_host != base_host,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_preserved() {
        let url = normalize_url("http://example.com/page").unwrap();
        assert_eq!(url.as_str(), "http://example.com/page");
    }

    #[test]
    fn test_https_prepended_when_missing() {
        let url = normalize_url("example.com/page").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let url = normalize_url("  https://example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com");
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = normalize_url("");
        assert!(matches!(result.unwrap_err(), ScrapeError::Validation(_)));
    }

    #[test]
    fn test_whitespace_only_rejected() {
        let result = normalize_url("   \t\n  ");
        assert!(matches!(result.unwrap_err(), ScrapeError::Validation(_)));
    }

    #[test]
    fn test_scheme_prefix_not_duplicated() {
        let url = normalize_url("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com");
    }

    #[test]
    fn test_bare_word_gets_scheme() {
        let url = normalize_url("localhost:8080").unwrap();
        assert_eq!(url.as_str(), "https://localhost:8080");
    }

    #[test]
    fn test_host_of_simple() {
        assert_eq!(
            host_of("https://example.com/path"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_host_of_unparseable() {
        assert_eq!(host_of("not a url"), None);
    }

    #[test]
    fn test_same_host_not_external() {
        assert!(!is_external_url(
            "https://example.com/other",
            "https://example.com/page"
        ));
    }

    #[test]
    fn test_different_host_external() {
        assert!(is_external_url(
            "https://other.com/page",
            "https://example.com/page"
        ));
    }

    #[test]
    fn test_subdomain_counts_as_external() {
        assert!(is_external_url(
            "https://blog.example.com/",
            "https://example.com/"
        ));
    }

    #[test]
    fn test_unparseable_link_not_external() {
        assert!(!is_external_url("mailto:user@example.com", "https://example.com/"));
        assert!(!is_external_url(":::", "https://example.com/"));
    }
}
