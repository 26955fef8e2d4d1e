//! Performance report data structures.

use serde::Serialize;

use crate::report::{Issue, Rating};

/// Page load metrics for one audit run.
///
/// `load_time` is measured from the actual fetch; the paint/interactivity
/// figures are simulated through the injected signal source since no real
/// browser runs (a stated non-goal).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub load_time: u64,
    pub first_contentful_paint: f64,
    pub largest_contentful_paint: f64,
    pub first_input_delay: f64,
    pub cumulative_layout_shift: f64,
    pub total_blocking_time: f64,
    pub speed_index: f64,
}

/// Fixed rating thresholds for one vital.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VitalThreshold {
    pub good: f64,
    pub poor: f64,
}

/// One Core Web Vital with its measured value and rating.
#[derive(Debug, Clone, Serialize)]
pub struct Vital {
    pub value: f64,
    pub rating: Rating,
    pub threshold: VitalThreshold,
}

/// The three Core Web Vitals, rated against the canonical cutoffs.
#[derive(Debug, Clone, Serialize)]
pub struct CoreWebVitals {
    pub lcp: Vital,
    pub fid: Vital,
    pub cls: Vital,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptimization {
    pub unoptimized_images: usize,
    /// Estimated KB savings
    pub potential_savings: u64,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssOptimization {
    /// Estimated percentage of unused CSS
    pub unused_css: u32,
    pub minification_savings: u32,
    pub critical_css: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsOptimization {
    /// Estimated percentage of unused JavaScript
    pub unused_js: u32,
    pub minification_savings: u32,
    /// Estimated KB
    pub bundle_size: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachingAnalysis {
    pub cacheable: u32,
    pub non_cacheable: u32,
    pub cache_hit_ratio: f64,
}

/// Static resource audit derived from the page markup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAnalysis {
    pub total_size: u64,
    pub image_optimization: ImageOptimization,
    pub css_optimization: CssOptimization,
    pub js_optimization: JsOptimization,
    pub caching: CachingAnalysis,
}

/// Network efficiency signals from the response headers and markup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAnalysis {
    pub requests: usize,
    pub transfer_size: u64,
    pub compression_ratio: f64,
    pub http2: bool,
    pub cdn: bool,
    pub keep_alive: bool,
}

/// Mobile rendering heuristics from a fetch with a mobile User-Agent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobilePerformance {
    pub score: u32,
    /// Display-only findings; each also expands into a report issue
    pub issues: Vec<String>,
    pub viewport: bool,
    pub touch_targets: bool,
    pub font_sizes: bool,
}

/// All performance metric records for one audit run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDetails {
    pub core_web_vitals: CoreWebVitals,
    pub resource_analysis: ResourceAnalysis,
    pub network_analysis: NetworkAnalysis,
    pub mobile_performance: MobilePerformance,
}

/// The performance result envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalysisResult {
    pub url: String,
    pub timestamp: String,
    pub score: u32,
    pub grade: String,
    pub metrics: PerformanceMetrics,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub details: PerformanceDetails,
}
