//! Error type definitions.

use thiserror::Error;

/// Errors produced while fetching a page or auxiliary resource.
///
/// These never escape an extractor except for the SEO top-level page fetch;
/// everywhere else they are converted to degraded default records.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request failed at the transport level (DNS, connect, timeout, TLS).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status where success was required.
    #[error("unexpected status: {0}")]
    Status(u16),
}

/// Domain-level audit failures, mapped to HTTP responses by the server layer.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The submitted URL did not parse as http/https even after prefixing.
    /// Surfaces as 400 with the exact message `Invalid URL format`.
    #[error("Invalid URL format")]
    InvalidUrl,

    /// The request body carried no usable `url` field.
    /// Surfaces as 400 with the exact message `Valid URL is required`.
    #[error("Valid URL is required")]
    UrlRequired,

    /// The SEO top-level page fetch failed before any extraction started.
    /// This is the one hard domain failure; surfaces as 400.
    #[error("Failed to fetch page content")]
    PageUnavailable(#[source] FetchError),

    /// The per-domain analysis deadline elapsed.
    #[error("analysis timed out")]
    Timeout,

    /// Anything unexpected; surfaces as 500 `<Domain> analysis failed`.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
