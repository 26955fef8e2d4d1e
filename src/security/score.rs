//! Security scorer.

use crate::report::clamp_score;

use super::types::{SecurityHeadersAnalysis, SslAnalysis, VulnerabilityAnalysis};

/// Computes the security score from the three scored metric records.
///
/// Starts at 100; deducts 30 for missing HTTPS and 5 per SSL issue, blends
/// 70/30 with the header sub-score, then deducts 15 per known vulnerability,
/// 10 per outdated software entry, and 8 per suspicious pattern. Clamped to
/// [0, 100].
pub fn calculate_security_score(
    ssl: &SslAnalysis,
    headers: &SecurityHeadersAnalysis,
    vulnerabilities: &VulnerabilityAnalysis,
) -> u32 {
    let mut score = 100.0;

    if !ssl.is_secure {
        score -= 30.0;
    }
    score -= ssl.issues.len() as f64 * 5.0;

    score = score * 0.7 + f64::from(headers.score) * 0.3;

    score -= vulnerabilities.known_vulnerabilities.len() as f64 * 15.0;
    score -= vulnerabilities.outdated_software.len() as f64 * 10.0;
    score -= vulnerabilities.suspicious_patterns.len() as f64 * 8.0;

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn clean_ssl() -> SslAnalysis {
        SslAnalysis {
            is_secure: true,
            protocol: "TLS".to_string(),
            cipher: "TLS_AES_256_GCM_SHA384".to_string(),
            certificate_valid: true,
            certificate_expiry: None,
            issues: Vec::new(),
        }
    }

    fn headers_scoring(score: u32) -> SecurityHeadersAnalysis {
        SecurityHeadersAnalysis {
            score,
            headers: BTreeMap::new(),
        }
    }

    fn no_vulns() -> VulnerabilityAnalysis {
        VulnerabilityAnalysis {
            known_vulnerabilities: Vec::new(),
            outdated_software: Vec::new(),
            exposed_ports: Vec::new(),
            suspicious_patterns: Vec::new(),
        }
    }

    #[test]
    fn perfect_site_scores_100() {
        let score = calculate_security_score(&clean_ssl(), &headers_scoring(100), &no_vulns());
        assert_eq!(score, 100);
    }

    #[test]
    fn missing_https_costs_30_before_blend() {
        let mut ssl = clean_ssl();
        ssl.is_secure = false;
        ssl.issues
            .push("Website does not use HTTPS encryption".to_string());
        // (100 - 30 - 5) * 0.7 + 100 * 0.3 = 75.5 -> 76
        let score = calculate_security_score(&ssl, &headers_scoring(100), &no_vulns());
        assert_eq!(score, 76);
    }

    #[test]
    fn vulnerabilities_deduct_after_blend() {
        let mut vulns = no_vulns();
        vulns.outdated_software.push("jQuery 1.9.1".to_string());
        vulns
            .suspicious_patterns
            .push("Potential XSS vulnerability detected".to_string());
        // 100 * 0.7 + 100 * 0.3 - 10 - 8 = 82
        let score = calculate_security_score(&clean_ssl(), &headers_scoring(100), &vulns);
        assert_eq!(score, 82);
    }

    #[test]
    fn worst_case_clamps_to_zero() {
        let mut ssl = clean_ssl();
        ssl.is_secure = false;
        ssl.issues = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let mut vulns = no_vulns();
        vulns.known_vulnerabilities = vec!["x".into(); 10];
        let score = calculate_security_score(&ssl, &headers_scoring(0), &vulns);
        assert_eq!(score, 0);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_always_in_range(
            secure in proptest::bool::ANY,
            ssl_issues in 0usize..20,
            header_score in 0u32..=100,
            known in 0usize..10,
            outdated in 0usize..10,
            suspicious in 0usize..10,
        ) {
            let ssl = SslAnalysis {
                is_secure: secure,
                protocol: String::new(),
                cipher: String::new(),
                certificate_valid: secure,
                certificate_expiry: None,
                issues: vec![String::new(); ssl_issues],
            };
            let vulns = VulnerabilityAnalysis {
                known_vulnerabilities: vec![String::new(); known],
                outdated_software: vec![String::new(); outdated],
                exposed_ports: Vec::new(),
                suspicious_patterns: vec![String::new(); suspicious],
            };
            let score = calculate_security_score(&ssl, &headers_scoring(header_score), &vulns);
            prop_assert!(score <= 100);
        }
    }
}
