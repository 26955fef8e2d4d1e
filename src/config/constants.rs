//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including timeouts, size limits, and scanner identities.

use std::time::Duration;

/// Default bind address for the API server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Default port for the API server
pub const DEFAULT_PORT: u16 = 3000;

/// Per-request HTTP client timeout.
/// Individual fetches that exceed this degrade to the extractor's pessimistic
/// default record rather than failing the whole analysis.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-domain analysis timeout.
/// The original service had no timeout at all, which left unbounded network
/// waits as the only real operational risk. Each domain orchestrator runs
/// under this deadline; expiry surfaces as that domain's 500 error.
pub const DOMAIN_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum URL length accepted from clients.
/// Matches common browser and server limits (IE, Apache, Nginx defaults).
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum response body size in bytes (2MB).
/// Bodies beyond this are truncated before extraction to prevent memory
/// exhaustion on pathological pages.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

// Scanner User-Agent strings.
// Each audit domain identifies itself the way the hosted scanners do; the
// mobile performance check deliberately presents an iPhone UA to get the
// mobile variant of the page.
/// User-Agent for security scans
pub const SECURITY_SCANNER_UA: &str = "WebInspect Security Scanner 1.0";
/// User-Agent for performance scans
pub const PERFORMANCE_SCANNER_UA: &str = "WebInspect Performance Scanner 1.0";
/// User-Agent for SEO scans
pub const SEO_SCANNER_UA: &str = "WebInspect SEO Scanner 1.0";
/// User-Agent for accessibility scans
pub const ACCESSIBILITY_SCANNER_UA: &str = "WebInspect-AccessibilityBot/1.0";
/// Mobile User-Agent used by the mobile performance check
pub const MOBILE_SCANNER_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_7_1 like Mac OS X) AppleWebKit/605.1.15";
