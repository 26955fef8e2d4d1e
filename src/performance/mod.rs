//! Performance audit domain.
//!
//! Pipeline: fetch fan-out (desktop + mobile User-Agent) → extractors →
//! scorer → issue generator → recommendation generator → result envelope.
//! Simulated paint/interactivity figures are drawn from the injected
//! [`SignalSource`](crate::signal::SignalSource) so tests stay deterministic.

pub(crate) mod extractors;
mod issues;
mod recommendations;
mod score;
mod types;

use log::info;
use url::Url;

use crate::config::{MOBILE_SCANNER_UA, PERFORMANCE_SCANNER_UA};
use crate::fetch::Fetcher;
use crate::report::{letter_grade, timestamp_now};
use crate::signal::SignalSource;

pub use extractors::{
    analyze_core_web_vitals, analyze_mobile_performance, analyze_network, analyze_resources,
    measure_page_load,
};
pub use issues::generate_performance_issues;
pub use recommendations::generate_performance_recommendations;
pub use score::calculate_performance_score;
pub use types::{
    CachingAnalysis, CoreWebVitals, CssOptimization, ImageOptimization, JsOptimization,
    MobilePerformance, NetworkAnalysis, PerformanceAnalysisResult, PerformanceDetails,
    PerformanceMetrics, ResourceAnalysis, Vital, VitalThreshold,
};

/// Runs the full performance analysis for a normalized target URL.
///
/// One desktop GET feeds the load metrics, resource audit, and network
/// analysis; a second GET with a mobile User-Agent feeds the mobile check.
/// Both run concurrently.
pub async fn analyze_performance(
    fetcher: &Fetcher,
    url: &Url,
    signals: &dyn SignalSource,
) -> PerformanceAnalysisResult {
    let target = url.as_str();
    let (page, mobile_page) = tokio::join!(
        fetcher.get(target, PERFORMANCE_SCANNER_UA),
        fetcher.get(target, MOBILE_SCANNER_UA),
    );
    let page = page.ok();
    let mobile_page = mobile_page.ok();

    let metrics = measure_page_load(page.as_ref(), signals);
    let core_web_vitals = analyze_core_web_vitals(&metrics);
    let resources = analyze_resources(page.as_ref(), signals);
    let network = analyze_network(page.as_ref());
    let mobile = analyze_mobile_performance(mobile_page.as_ref(), &metrics);

    let score = calculate_performance_score(&core_web_vitals, &resources, &network);
    let issues = generate_performance_issues(&core_web_vitals, &resources, &network, &mobile);
    let recommendations = generate_performance_recommendations(&issues, &resources, &network);
    let grade = letter_grade(score).to_string();

    info!("Performance analysis of {target}: score {score} ({grade}), {} issues", issues.len());

    PerformanceAnalysisResult {
        url: target.to_string(),
        timestamp: timestamp_now(),
        score,
        grade,
        metrics,
        issues,
        recommendations,
        details: PerformanceDetails {
            core_web_vitals,
            resource_analysis: resources,
            network_analysis: network,
            mobile_performance: mobile,
        },
    }
}
