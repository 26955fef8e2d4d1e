//! Security report data structures.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::report::Issue;

/// SSL/TLS posture of the target.
///
/// No real certificate chain is inspected (a stated non-goal); the protocol
/// and cipher fields are fixed placeholders when the target is HTTPS.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SslAnalysis {
    pub is_secure: bool,
    pub protocol: String,
    pub cipher: String,
    pub certificate_valid: bool,
    pub certificate_expiry: Option<String>,
    /// Display-only findings; also feed the SSL score penalty
    pub issues: Vec<String>,
}

/// Presence and value of one critical security header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCheck {
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Security header audit: six critical headers and a presence sub-score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityHeadersAnalysis {
    /// `present_count / 6 * 100`, rounded
    pub score: u32,
    pub headers: BTreeMap<String, HeaderCheck>,
}

impl SecurityHeadersAnalysis {
    /// Returns whether a given header was present in the response.
    pub fn is_present(&self, name: &str) -> bool {
        self.headers.get(name).is_some_and(|h| h.present)
    }
}

/// Heuristic vulnerability sweep over the page markup and server header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityAnalysis {
    pub known_vulnerabilities: Vec<String>,
    pub outdated_software: Vec<String>,
    /// Always empty; port scanning is out of scope
    pub exposed_ports: Vec<u16>,
    pub suspicious_patterns: Vec<String>,
}

/// Simulated certificate details, present only for HTTPS targets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAnalysis {
    pub issuer: String,
    pub subject: String,
    pub valid_from: String,
    pub valid_to: String,
    pub signature_algorithm: String,
    pub key_size: u32,
    pub is_wildcard: bool,
}

/// All security metric records for one audit run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityDetails {
    pub ssl: SslAnalysis,
    pub headers: SecurityHeadersAnalysis,
    pub vulnerabilities: VulnerabilityAnalysis,
    pub certificates: Option<CertificateAnalysis>,
}

/// The security result envelope. Security reports carry no grade.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAnalysisResult {
    pub url: String,
    pub timestamp: String,
    pub score: u32,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub details: SecurityDetails,
}
