//! Performance scorer.

use crate::report::{clamp_score, Rating};

use super::types::{CoreWebVitals, NetworkAnalysis, ResourceAnalysis, Vital};

fn vital_points(vital: &Vital) -> f64 {
    match vital.rating {
        Rating::Good => 100.0,
        Rating::NeedsImprovement => 70.0,
        Rating::Poor => 40.0,
    }
}

/// Computes the performance score as a chain of weighted blends.
///
/// Base 100 blended 60/40 with the web-vitals average (100/70/40 points per
/// rating), then 70/30 with the resource score, then 70/30 with the network
/// score. Clamped to [0, 100].
pub fn calculate_performance_score(
    core_web_vitals: &CoreWebVitals,
    resources: &ResourceAnalysis,
    network: &NetworkAnalysis,
) -> u32 {
    let mut score = 100.0;

    let web_vitals_score = (vital_points(&core_web_vitals.lcp)
        + vital_points(&core_web_vitals.fid)
        + vital_points(&core_web_vitals.cls))
        / 3.0;
    score = score * 0.6 + web_vitals_score * 0.4;

    let resource_score = (100.0
        - resources.image_optimization.unoptimized_images as f64 * 5.0
        - f64::from(resources.css_optimization.unused_css)
        - f64::from(resources.js_optimization.unused_js))
    .max(0.0);
    score = score * 0.7 + resource_score * 0.3;

    let network_score = (100.0 - (network.requests as f64 - 50.0).max(0.0) * 2.0).max(0.0);
    score = score * 0.7 + network_score * 0.3;

    clamp_score(score)
}
