//! Security issue generator.
//!
//! Rules run in a fixed declared order; the output list is insertion-ordered,
//! not sorted by severity.

use crate::config::{HEADER_CONTENT_SECURITY_POLICY, HEADER_STRICT_TRANSPORT_SECURITY};
use crate::report::{Issue, Severity};

use super::types::{SecurityHeadersAnalysis, SslAnalysis, VulnerabilityAnalysis};

/// Derives the ordered security issue list from the metric records.
pub fn generate_security_issues(
    ssl: &SslAnalysis,
    headers: &SecurityHeadersAnalysis,
    vulnerabilities: &VulnerabilityAnalysis,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !ssl.is_secure {
        issues.push(Issue::new(
            Severity::Critical,
            "Encryption",
            "No HTTPS Encryption",
            "Website does not use HTTPS encryption, making data transmission vulnerable to interception.",
            "Implement SSL/TLS certificate and redirect all HTTP traffic to HTTPS",
            None,
        ));
    }

    if !headers.is_present(HEADER_STRICT_TRANSPORT_SECURITY) {
        issues.push(Issue::new(
            Severity::High,
            "Security Headers",
            "Missing HSTS Header",
            "HTTP Strict Transport Security header is not configured.",
            "Add Strict-Transport-Security header to prevent protocol downgrade attacks",
            None,
        ));
    }

    if !headers.is_present(HEADER_CONTENT_SECURITY_POLICY) {
        issues.push(Issue::new(
            Severity::High,
            "Security Headers",
            "Missing Content Security Policy",
            "No Content Security Policy header found.",
            "Implement CSP header to prevent XSS and data injection attacks",
            None,
        ));
    }

    for software in &vulnerabilities.outdated_software {
        issues.push(Issue::new(
            Severity::Medium,
            "Software",
            "Outdated Software Detected",
            format!("Outdated software detected: {software}"),
            "Update to the latest secure version",
            None,
        ));
    }

    for pattern in &vulnerabilities.suspicious_patterns {
        issues.push(Issue::new(
            Severity::High,
            "Code Security",
            "Potential Security Vulnerability",
            pattern.clone(),
            "Review and secure the identified code patterns",
            None,
        ));
    }

    issues
}
