//! Security recommendation generator.

use crate::config::CRITICAL_SECURITY_HEADERS;

use super::types::{SecurityHeadersAnalysis, SslAnalysis, VulnerabilityAnalysis};

/// Derives the priority-ordered recommendation list.
///
/// Header recommendations follow the declared header order, not the
/// alphabetical order of the serialized map. Unlike the performance and SEO
/// domains, security has no boilerplate tail: a fully hardened site gets an
/// empty list.
pub fn generate_security_recommendations(
    ssl: &SslAnalysis,
    headers: &SecurityHeadersAnalysis,
    vulnerabilities: &VulnerabilityAnalysis,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !ssl.is_secure {
        recommendations.push("Implement HTTPS encryption across your entire website".to_string());
    }

    for (name, recommendation) in CRITICAL_SECURITY_HEADERS {
        if let Some(check) = headers.headers.get(*name) {
            if !check.present {
                recommendations.push(recommendation.to_string());
            }
        }
    }

    if !vulnerabilities.outdated_software.is_empty() {
        recommendations
            .push("Update outdated software and libraries to latest secure versions".to_string());
    }

    if !vulnerabilities.suspicious_patterns.is_empty() {
        recommendations.push(
            "Review code for potential security vulnerabilities and implement input validation"
                .to_string(),
        );
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::security::types::HeaderCheck;

    #[test]
    fn hardened_site_gets_no_recommendations() {
        let ssl = SslAnalysis {
            is_secure: true,
            protocol: "TLS".to_string(),
            cipher: String::new(),
            certificate_valid: true,
            certificate_expiry: None,
            issues: Vec::new(),
        };
        let mut headers = BTreeMap::new();
        for (name, rec) in CRITICAL_SECURITY_HEADERS {
            headers.insert(
                name.to_string(),
                HeaderCheck {
                    present: true,
                    value: Some("x".to_string()),
                    recommendation: Some(rec.to_string()),
                },
            );
        }
        let headers = SecurityHeadersAnalysis {
            score: 100,
            headers,
        };
        let vulns = VulnerabilityAnalysis {
            known_vulnerabilities: Vec::new(),
            outdated_software: Vec::new(),
            exposed_ports: Vec::new(),
            suspicious_patterns: Vec::new(),
        };
        assert!(generate_security_recommendations(&ssl, &headers, &vulns).is_empty());
    }

    #[test]
    fn missing_headers_recommended_in_declared_order() {
        let ssl = SslAnalysis {
            is_secure: false,
            protocol: "HTTP".to_string(),
            cipher: String::new(),
            certificate_valid: false,
            certificate_expiry: None,
            issues: Vec::new(),
        };
        let mut headers = BTreeMap::new();
        for (name, rec) in CRITICAL_SECURITY_HEADERS {
            headers.insert(
                name.to_string(),
                HeaderCheck {
                    present: false,
                    value: None,
                    recommendation: Some(rec.to_string()),
                },
            );
        }
        let headers = SecurityHeadersAnalysis { score: 0, headers };
        let vulns = VulnerabilityAnalysis {
            known_vulnerabilities: Vec::new(),
            outdated_software: Vec::new(),
            exposed_ports: Vec::new(),
            suspicious_patterns: Vec::new(),
        };
        let recs = generate_security_recommendations(&ssl, &headers, &vulns);
        assert_eq!(
            recs[0],
            "Implement HTTPS encryption across your entire website"
        );
        assert_eq!(recs[1], "Enable HSTS to prevent protocol downgrade attacks");
        assert_eq!(recs.len(), 1 + CRITICAL_SECURITY_HEADERS.len());
    }
}
