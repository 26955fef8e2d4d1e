//! HTTP header name constants.
//!
//! Header names are kept lowercase because reqwest normalizes header names
//! and the wire format of the analysis reports uses lowercase keys.

/// Strict-Transport-Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// Content-Security-Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "permissions-policy";

/// The six critical security headers, in report order, paired with the
/// recommendation text emitted when a header is absent.
///
/// The header sub-score is `present_count / 6 * 100`; changing this list
/// changes the denominator, so additions must be deliberate.
pub const CRITICAL_SECURITY_HEADERS: &[(&str, &str)] = &[
    (
        HEADER_STRICT_TRANSPORT_SECURITY,
        "Enable HSTS to prevent protocol downgrade attacks",
    ),
    (
        HEADER_CONTENT_SECURITY_POLICY,
        "Implement CSP to prevent XSS attacks",
    ),
    (
        HEADER_X_FRAME_OPTIONS,
        "Set X-Frame-Options to prevent clickjacking",
    ),
    (
        HEADER_X_CONTENT_TYPE_OPTIONS,
        "Set X-Content-Type-Options to prevent MIME sniffing",
    ),
    (
        HEADER_REFERRER_POLICY,
        "Set Referrer-Policy to control referrer information",
    ),
    (
        HEADER_PERMISSIONS_POLICY,
        "Set Permissions-Policy to control browser features",
    ),
];

// Other headers consulted by the analyzers
/// Server header (software/version sniffing, CDN and HTTP/2 hints)
pub const HEADER_SERVER: &str = "server";
/// Content-Length header (transfer size estimation)
pub const HEADER_CONTENT_LENGTH: &str = "content-length";
/// Content-Encoding header (compression detection)
pub const HEADER_CONTENT_ENCODING: &str = "content-encoding";
/// Connection header (keep-alive detection)
pub const HEADER_CONNECTION: &str = "connection";
/// X-Served-By header (CDN detection)
pub const HEADER_X_SERVED_BY: &str = "x-served-by";
/// X-Cache header (CDN detection)
pub const HEADER_X_CACHE: &str = "x-cache";
