//! URL validation and normalization utilities.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AuditError;

/// Validates and normalizes an audit target URL.
///
/// Adds an `https://` prefix if no scheme is present, then validates that the
/// result parses as a URL with an http or https scheme. Normalization happens
/// exactly once, before any extractor runs; every domain analyzer receives the
/// already-normalized URL.
///
/// The returned [`Url`] serializes in canonical form, so a bare domain like
/// `example.com` becomes `https://example.com/` (trailing slash included) in
/// every report.
///
/// # Arguments
///
/// * `raw` - The URL string as submitted by the client
///
/// # Returns
///
/// The parsed, normalized URL, or [`AuditError::InvalidUrl`] if the input
/// cannot be interpreted as an http/https URL.
pub fn validate_and_normalize_url(raw: &str) -> Result<Url, AuditError> {
    // Length check before normalization: overly long URLs are rejected, not
    // truncated, to keep the report key stable.
    if raw.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {})",
            raw.len(),
            MAX_URL_LENGTH
        );
        return Err(AuditError::InvalidUrl);
    }

    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    match Url::parse(&candidate) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            if parsed.host_str().is_none() {
                warn!("Rejecting URL without a host: {raw}");
                return Err(AuditError::InvalidUrl);
            }
            Ok(parsed)
        }
        Ok(_) => {
            warn!("Rejecting unsupported scheme for URL: {raw}");
            Err(AuditError::InvalidUrl)
        }
        Err(_) => {
            warn!("Rejecting invalid URL: {raw}");
            Err(AuditError::InvalidUrl)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;

    #[test]
    fn adds_https_and_canonicalizes() {
        let url = validate_and_normalize_url("example.com").unwrap();
        assert_eq!(url.to_string(), "https://example.com/");
    }

    #[test]
    fn preserves_http_scheme() {
        let url = validate_and_normalize_url("http://example.com").unwrap();
        assert_eq!(url.to_string(), "http://example.com/");
    }

    #[test]
    fn preserves_path_and_query() {
        let url = validate_and_normalize_url("example.com/path?q=1").unwrap();
        assert_eq!(url.to_string(), "https://example.com/path?q=1");
    }

    #[test]
    fn rejects_garbage() {
        assert!(validate_and_normalize_url("not a url").is_err());
        assert!(validate_and_normalize_url("").is_err());
        assert!(validate_and_normalize_url("://example.com").is_err());
    }

    #[test]
    fn rejects_overlong_url() {
        let long = format!("https://example.com/{}", "a".repeat(3000));
        assert!(validate_and_normalize_url(&long).is_err());
    }

    #[test]
    fn exposes_origin_for_probes() {
        let url = validate_and_normalize_url("example.com/deep/page").unwrap();
        assert_eq!(url.origin().ascii_serialization(), "https://example.com");
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalization_is_idempotent(domain in "[a-z]{3,20}\\.[a-z]{2,5}") {
            let first = validate_and_normalize_url(&domain).unwrap();
            let second = validate_and_normalize_url(first.as_str()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn no_panic_on_arbitrary_input(input in "\\PC{0,200}") {
            let _ = validate_and_normalize_url(&input);
        }

        #[test]
        fn bare_domains_become_https(domain in "[a-z]{3,20}\\.[a-z]{2,5}") {
            let url = validate_and_normalize_url(&domain).unwrap();
            prop_assert_eq!(url.scheme(), "https");
        }
    }
}
