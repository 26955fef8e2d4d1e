//! Security audit domain.
//!
//! Pipeline: fetch fan-out → extractors → scorer → issue generator →
//! recommendation generator → result envelope. Security never hard-fails on
//! network problems; every failed fetch degrades to a pessimistic record and
//! the score reflects the worst case.

mod extractors;
mod issues;
mod recommendations;
mod score;
mod types;

use log::info;
use url::Url;

use crate::config::SECURITY_SCANNER_UA;
use crate::fetch::Fetcher;
use crate::report::timestamp_now;

pub use extractors::{
    analyze_certificate, analyze_security_headers, analyze_ssl, analyze_vulnerabilities,
};
pub use issues::generate_security_issues;
pub use recommendations::generate_security_recommendations;
pub use score::calculate_security_score;
pub use types::{
    CertificateAnalysis, HeaderCheck, SecurityAnalysisResult, SecurityDetails,
    SecurityHeadersAnalysis, SslAnalysis, VulnerabilityAnalysis,
};

/// Runs the full security analysis for a normalized target URL.
///
/// The SSL and header extractors share one HEAD fetch; the vulnerability
/// sweep needs the body and performs its own GET. The two fetches run
/// concurrently.
pub async fn analyze_security(fetcher: &Fetcher, url: &Url) -> SecurityAnalysisResult {
    let target = url.as_str();
    let (head, page) = tokio::join!(
        fetcher.head(target, SECURITY_SCANNER_UA),
        fetcher.get(target, SECURITY_SCANNER_UA),
    );
    let head = head.ok();
    let page = page.ok();

    let ssl = analyze_ssl(url, head.as_ref());
    let headers = analyze_security_headers(head.as_ref());
    let vulnerabilities = analyze_vulnerabilities(page.as_ref());
    let certificates = analyze_certificate(url);

    let score = calculate_security_score(&ssl, &headers, &vulnerabilities);
    let issues = generate_security_issues(&ssl, &headers, &vulnerabilities);
    let recommendations = generate_security_recommendations(&ssl, &headers, &vulnerabilities);

    info!("Security analysis of {target}: score {score}, {} issues", issues.len());

    SecurityAnalysisResult {
        url: target.to_string(),
        timestamp: timestamp_now(),
        score,
        issues,
        recommendations,
        details: SecurityDetails {
            ssl,
            headers,
            vulnerabilities,
            certificates,
        },
    }
}
