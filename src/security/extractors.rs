//! Security signal extractors.
//!
//! Each extractor accepts the fetch result it depends on as an `Option`;
//! `None` means the fetch failed and the extractor returns its documented
//! pessimistic default record instead of propagating the failure.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Duration, SecondsFormat, Utc};
use regex::Regex;
use url::Url;

use crate::config::{CRITICAL_SECURITY_HEADERS, HEADER_CONTENT_SECURITY_POLICY, HEADER_SERVER};
use crate::fetch::PageSnapshot;

use super::types::{
    CertificateAnalysis, HeaderCheck, SecurityHeadersAnalysis, SslAnalysis, VulnerabilityAnalysis,
};

static JQUERY_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)jquery[/-](\d+\.\d+\.\d+)").expect("jQuery version pattern must compile")
});

/// Analyzes the SSL/TLS posture of the target.
///
/// `isSecure` is purely scheme-based; when the HEAD fetch failed the whole
/// record degrades to the worst case, including for HTTPS targets.
pub fn analyze_ssl(url: &Url, head: Option<&PageSnapshot>) -> SslAnalysis {
    let Some(head) = head else {
        return SslAnalysis {
            is_secure: false,
            protocol: "Unknown".to_string(),
            cipher: "Unknown".to_string(),
            certificate_valid: false,
            certificate_expiry: None,
            issues: vec!["Failed to analyze SSL configuration".to_string()],
        };
    };

    let is_secure = url.scheme() == "https";
    let mut issues = Vec::new();

    if !is_secure {
        issues.push("Website does not use HTTPS encryption".to_string());
    }

    // Mixed-content heuristic: a CSP that allows http: sources on an HTTPS page
    if is_secure
        && head
            .header(HEADER_CONTENT_SECURITY_POLICY)
            .is_some_and(|csp| csp.contains("http:"))
    {
        issues.push("Potential mixed content detected".to_string());
    }

    SslAnalysis {
        is_secure,
        protocol: if is_secure { "TLS" } else { "HTTP" }.to_string(),
        cipher: "TLS_AES_256_GCM_SHA384".to_string(), // simulated
        certificate_valid: is_secure,
        certificate_expiry: is_secure.then(|| {
            (Utc::now() + Duration::days(365)).to_rfc3339_opts(SecondsFormat::Millis, true)
        }),
        issues,
    }
}

/// Checks the six critical security headers and derives the presence sub-score.
pub fn analyze_security_headers(head: Option<&PageSnapshot>) -> SecurityHeadersAnalysis {
    let Some(head) = head else {
        return SecurityHeadersAnalysis {
            score: 0,
            headers: BTreeMap::new(),
        };
    };

    let mut headers = BTreeMap::new();
    let mut present_count = 0usize;
    for (name, recommendation) in CRITICAL_SECURITY_HEADERS {
        let value = head.header(name).map(str::to_string);
        let present = value.is_some();
        if present {
            present_count += 1;
        }
        headers.insert(
            name.to_string(),
            HeaderCheck {
                present,
                value,
                recommendation: Some(recommendation.to_string()),
            },
        );
    }

    let score = ((present_count as f64 / CRITICAL_SECURITY_HEADERS.len() as f64) * 100.0).round()
        as u32;
    SecurityHeadersAnalysis { score, headers }
}

/// Sweeps the page markup and server header for vulnerability heuristics.
///
/// This is pattern matching, not scanning: XSS/SQLi indicators are substring
/// checks, and "outdated" detection covers only a jQuery version sniff and
/// two legacy server banners.
pub fn analyze_vulnerabilities(page: Option<&PageSnapshot>) -> VulnerabilityAnalysis {
    let Some(page) = page else {
        return VulnerabilityAnalysis {
            known_vulnerabilities: Vec::new(),
            outdated_software: Vec::new(),
            exposed_ports: Vec::new(),
            suspicious_patterns: vec!["Failed to analyze for vulnerabilities".to_string()],
        };
    };

    let html = &page.body;
    let known_vulnerabilities = Vec::new();
    let mut outdated_software = Vec::new();
    let mut suspicious_patterns = Vec::new();

    if html.contains("eval(") || html.contains("innerHTML") {
        suspicious_patterns.push("Potential XSS vulnerability detected".to_string());
    }
    if html.contains("mysql_query") || html.contains("SELECT * FROM") {
        suspicious_patterns.push("Potential SQL injection vulnerability".to_string());
    }

    if let Some(caps) = JQUERY_VERSION_RE.captures(html) {
        let version = &caps[1];
        if major_minor(version) < 3.5 {
            outdated_software.push(format!("jQuery {version} (outdated, security vulnerabilities)"));
        }
    }

    if let Some(server) = page.header(HEADER_SERVER) {
        if server.contains("Apache/2.2") || server.contains("nginx/1.1") {
            outdated_software.push(format!("{server} (outdated version detected)"));
        }
    }

    VulnerabilityAnalysis {
        known_vulnerabilities,
        outdated_software,
        exposed_ports: Vec::new(), // would require network scanning
        suspicious_patterns,
    }
}

/// Simulated certificate details; absent entirely for non-TLS targets.
pub fn analyze_certificate(url: &Url) -> Option<CertificateAnalysis> {
    if url.scheme() != "https" {
        return None;
    }

    let now = Utc::now();
    Some(CertificateAnalysis {
        issuer: "Let's Encrypt Authority X3".to_string(),
        subject: url.host_str().unwrap_or_default().to_string(),
        valid_from: (now - Duration::days(30)).to_rfc3339_opts(SecondsFormat::Millis, true),
        valid_to: (now + Duration::days(60)).to_rfc3339_opts(SecondsFormat::Millis, true),
        signature_algorithm: "SHA256-RSA".to_string(),
        key_size: 2048,
        is_wildcard: false,
    })
}

/// Interprets a dotted version as its leading `major.minor` float, the way
/// the version comparison rule is defined ("3.4.1" compares as 3.4).
fn major_minor(version: &str) -> f64 {
    let mut parts = version.splitn(3, '.');
    let major = parts.next().unwrap_or("0");
    let minor = parts.next().unwrap_or("0");
    format!("{major}.{minor}").parse().unwrap_or(0.0)
}
