//! Performance signal extractors.
//!
//! Resource counting is deliberately regex-based over the raw markup, not a
//! DOM walk; the counts feed the scorer and must stay stable. Fabricated
//! figures (paint timings, unused-CSS estimates) are drawn from the injected
//! [`SignalSource`].

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    HEADER_CONNECTION, HEADER_CONTENT_ENCODING, HEADER_CONTENT_LENGTH, HEADER_SERVER,
    HEADER_X_CACHE, HEADER_X_SERVED_BY,
};
use crate::fetch::PageSnapshot;
use crate::report::Rating;
use crate::signal::SignalSource;

use super::types::{
    CachingAnalysis, CoreWebVitals, CssOptimization, ImageOptimization, JsOptimization,
    MobilePerformance, NetworkAnalysis, PerformanceMetrics, ResourceAnalysis, Vital,
    VitalThreshold,
};

static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]+src="[^"]*""#).expect("img src pattern must compile")
});
static STYLESHEET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link[^>]+rel="stylesheet"[^>]*>"#).expect("stylesheet pattern must compile")
});
static INLINE_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("inline style pattern must compile")
});
static SCRIPT_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<script[^>]*src="[^"]*"[^>]*>"#).expect("script src pattern must compile")
});
static INLINE_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("inline script pattern must compile")
});

/// Builds the load metrics for the run.
///
/// On fetch failure returns the documented worst-case placeholders so the
/// scorer still produces a (poor) score instead of erroring.
pub fn measure_page_load(
    page: Option<&PageSnapshot>,
    signals: &dyn SignalSource,
) -> PerformanceMetrics {
    let Some(page) = page else {
        return PerformanceMetrics {
            load_time: 10_000,
            first_contentful_paint: 5000.0,
            largest_contentful_paint: 8000.0,
            first_input_delay: 500.0,
            cumulative_layout_shift: 0.5,
            total_blocking_time: 1000.0,
            speed_index: 8000.0,
        };
    };

    PerformanceMetrics {
        load_time: page.elapsed_ms,
        first_contentful_paint: signals.sample(500.0, 2500.0),
        largest_contentful_paint: signals.sample(1000.0, 4000.0),
        first_input_delay: signals.sample(50.0, 250.0),
        cumulative_layout_shift: signals.sample(0.0, 0.3),
        total_blocking_time: signals.sample(100.0, 600.0),
        speed_index: signals.sample(1000.0, 5000.0),
    }
}

fn rate(value: f64, good: f64, poor: f64) -> Rating {
    if value <= good {
        Rating::Good
    } else if value <= poor {
        Rating::NeedsImprovement
    } else {
        Rating::Poor
    }
}

/// Rates the Core Web Vitals against the canonical cutoffs:
/// LCP 2500/4000ms, FID 100/300ms, CLS 0.1/0.25.
pub fn analyze_core_web_vitals(metrics: &PerformanceMetrics) -> CoreWebVitals {
    CoreWebVitals {
        lcp: Vital {
            value: metrics.largest_contentful_paint,
            rating: rate(metrics.largest_contentful_paint, 2500.0, 4000.0),
            threshold: VitalThreshold {
                good: 2500.0,
                poor: 4000.0,
            },
        },
        fid: Vital {
            value: metrics.first_input_delay,
            rating: rate(metrics.first_input_delay, 100.0, 300.0),
            threshold: VitalThreshold {
                good: 100.0,
                poor: 300.0,
            },
        },
        cls: Vital {
            value: metrics.cumulative_layout_shift,
            rating: rate(metrics.cumulative_layout_shift, 0.1, 0.25),
            threshold: VitalThreshold {
                good: 0.1,
                poor: 0.25,
            },
        },
    }
}

/// Audits static resources referenced by the page markup.
pub fn analyze_resources(
    page: Option<&PageSnapshot>,
    signals: &dyn SignalSource,
) -> ResourceAnalysis {
    let Some(page) = page else {
        return ResourceAnalysis {
            total_size: 0,
            image_optimization: ImageOptimization {
                unoptimized_images: 0,
                potential_savings: 0,
                formats: Vec::new(),
            },
            css_optimization: CssOptimization {
                unused_css: 0,
                minification_savings: 0,
                critical_css: false,
            },
            js_optimization: JsOptimization {
                unused_js: 0,
                minification_savings: 0,
                bundle_size: 0,
            },
            caching: CachingAnalysis {
                cacheable: 0,
                non_cacheable: 100,
                cache_hit_ratio: 0.0,
            },
        };
    };

    let html = &page.body;

    // An image counts as unoptimized unless the tag mentions a modern format
    let unoptimized_images = IMG_SRC_RE
        .find_iter(html)
        .filter(|m| !m.as_str().contains(".webp") && !m.as_str().contains(".avif"))
        .count();

    let js_count = SCRIPT_SRC_RE.find_iter(html).count();
    let inline_js_count = INLINE_SCRIPT_RE.find_iter(html).count();

    let total_size = page
        .header(HEADER_CONTENT_LENGTH)
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|&len| len > 0)
        .unwrap_or(html.len() as u64);

    ResourceAnalysis {
        total_size,
        image_optimization: ImageOptimization {
            unoptimized_images,
            potential_savings: unoptimized_images as u64 * 50, // estimated KB
            formats: vec![
                "WebP".to_string(),
                "AVIF".to_string(),
                "Progressive JPEG".to_string(),
            ],
        },
        css_optimization: CssOptimization {
            unused_css: signals.sample(10.0, 40.0).floor() as u32,
            minification_savings: signals.sample(5.0, 25.0).floor() as u32,
            critical_css: html.contains("critical") || html.contains("inline"),
        },
        js_optimization: JsOptimization {
            unused_js: signals.sample(15.0, 40.0).floor() as u32,
            minification_savings: signals.sample(10.0, 25.0).floor() as u32,
            bundle_size: js_count as u64 * 50 + inline_js_count as u64 * 20, // estimated KB
        },
        caching: CachingAnalysis {
            cacheable: signals.sample(60.0, 140.0).floor() as u32,
            non_cacheable: signals.sample(10.0, 30.0).floor() as u32,
            cache_hit_ratio: signals.sample(0.6, 1.0),
        },
    }
}

/// Derives network efficiency signals from headers and resource counts.
pub fn analyze_network(page: Option<&PageSnapshot>) -> NetworkAnalysis {
    let Some(page) = page else {
        return NetworkAnalysis {
            requests: 0,
            transfer_size: 0,
            compression_ratio: 1.0,
            http2: false,
            cdn: false,
            keep_alive: false,
        };
    };

    let html = &page.body;
    let images = IMG_SRC_RE.find_iter(html).count();
    let css = STYLESHEET_RE.find_iter(html).count();
    let js = SCRIPT_SRC_RE.find_iter(html).count();
    let requests = images + css + js + 1; // +1 for the HTML document itself

    let is_compressed = matches!(page.header(HEADER_CONTENT_ENCODING), Some("gzip") | Some("br"));
    let server = page.header(HEADER_SERVER).unwrap_or_default();

    NetworkAnalysis {
        requests,
        transfer_size: page
            .header(HEADER_CONTENT_LENGTH)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        compression_ratio: if is_compressed { 0.7 } else { 1.0 },
        http2: server.contains("h2"),
        cdn: server.contains("cloudflare")
            || page.has_header(HEADER_X_SERVED_BY)
            || page.has_header(HEADER_X_CACHE),
        keep_alive: page.header(HEADER_CONNECTION) == Some("keep-alive"),
    }
}

/// Scores mobile rendering from a fetch made with a mobile User-Agent.
///
/// Mobile load time is modeled as 25% slower than the measured desktop load.
pub fn analyze_mobile_performance(
    mobile_page: Option<&PageSnapshot>,
    metrics: &PerformanceMetrics,
) -> MobilePerformance {
    let Some(page) = mobile_page else {
        return MobilePerformance {
            score: 0,
            issues: vec!["Failed to analyze mobile performance".to_string()],
            viewport: false,
            touch_targets: false,
            font_sizes: false,
        };
    };

    let html = &page.body;
    let viewport = html.contains("viewport") && html.contains("width=device-width");
    let touch_targets = !html.contains("onclick") || html.contains("touch-action");
    let font_sizes = !html.contains("font-size: 1") && !html.contains("font-size:1");

    let mut issues = Vec::new();
    if !viewport {
        issues.push("Missing responsive viewport meta tag".to_string());
    }
    if !touch_targets {
        issues.push("Touch targets may be too small".to_string());
    }
    if !font_sizes {
        issues.push("Font sizes may be too small for mobile".to_string());
    }

    let mobile_load_time = metrics.load_time as f64 * 1.25;
    let score = (100.0 - (mobile_load_time / 100.0).floor() - issues.len() as f64 * 10.0)
        .max(0.0) as u32;

    MobilePerformance {
        score,
        issues,
        viewport,
        touch_targets,
        font_sizes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::FixedSignals;
    use std::collections::HashMap;

    fn snapshot(headers: &[(&str, &str)], body: &str, elapsed_ms: u64) -> PageSnapshot {
        PageSnapshot {
            status: 200,
            ok: true,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            body: body.to_string(),
            elapsed_ms,
        }
    }

    #[test]
    fn web_vitals_rating_boundaries() {
        let mut metrics = measure_page_load(Some(&snapshot(&[], "", 100)), &FixedSignals::floor());

        metrics.largest_contentful_paint = 2500.0;
        assert_eq!(analyze_core_web_vitals(&metrics).lcp.rating, Rating::Good);
        metrics.largest_contentful_paint = 2501.0;
        assert_eq!(
            analyze_core_web_vitals(&metrics).lcp.rating,
            Rating::NeedsImprovement
        );
        metrics.largest_contentful_paint = 4000.0;
        assert_eq!(
            analyze_core_web_vitals(&metrics).lcp.rating,
            Rating::NeedsImprovement
        );
        metrics.largest_contentful_paint = 4001.0;
        assert_eq!(analyze_core_web_vitals(&metrics).lcp.rating, Rating::Poor);

        metrics.first_input_delay = 100.0;
        assert_eq!(analyze_core_web_vitals(&metrics).fid.rating, Rating::Good);
        metrics.first_input_delay = 300.0;
        assert_eq!(
            analyze_core_web_vitals(&metrics).fid.rating,
            Rating::NeedsImprovement
        );
        metrics.first_input_delay = 300.1;
        assert_eq!(analyze_core_web_vitals(&metrics).fid.rating, Rating::Poor);

        metrics.cumulative_layout_shift = 0.1;
        assert_eq!(analyze_core_web_vitals(&metrics).cls.rating, Rating::Good);
        metrics.cumulative_layout_shift = 0.25;
        assert_eq!(
            analyze_core_web_vitals(&metrics).cls.rating,
            Rating::NeedsImprovement
        );
        metrics.cumulative_layout_shift = 0.26;
        assert_eq!(analyze_core_web_vitals(&metrics).cls.rating, Rating::Poor);
    }

    #[test]
    fn failed_fetch_yields_worst_case_metrics() {
        let metrics = measure_page_load(None, &FixedSignals::floor());
        assert_eq!(metrics.load_time, 10_000);
        let vitals = analyze_core_web_vitals(&metrics);
        assert_eq!(vitals.lcp.rating, Rating::Poor);
        assert_eq!(vitals.fid.rating, Rating::Poor);
        assert_eq!(vitals.cls.rating, Rating::Poor);
    }

    #[test]
    fn counts_unoptimized_images() {
        let html = r#"
            <img src="/a.png"> <img src="/b.jpg"> <img src="/c.webp"> <img src="/d.avif">
        "#;
        let resources =
            analyze_resources(Some(&snapshot(&[], html, 100)), &FixedSignals::floor());
        assert_eq!(resources.image_optimization.unoptimized_images, 2);
        assert_eq!(resources.image_optimization.potential_savings, 100);
    }

    #[test]
    fn request_count_includes_document() {
        let html = r#"
            <img src="/a.png">
            <link rel="stylesheet" href="/a.css">
            <script src="/a.js"></script>
            <script src="/b.js"></script>
        "#;
        let network = analyze_network(Some(&snapshot(&[], html, 100)));
        assert_eq!(network.requests, 5);
    }

    #[test]
    fn compression_detected_from_encoding_header() {
        let gz = analyze_network(Some(&snapshot(&[("content-encoding", "gzip")], "", 100)));
        assert_eq!(gz.compression_ratio, 0.7);
        let plain = analyze_network(Some(&snapshot(&[], "", 100)));
        assert_eq!(plain.compression_ratio, 1.0);
    }

    #[test]
    fn cdn_detected_from_headers() {
        let via_cache = analyze_network(Some(&snapshot(&[("x-cache", "HIT")], "", 100)));
        assert!(via_cache.cdn);
        let cloudflare =
            analyze_network(Some(&snapshot(&[("server", "cloudflare")], "", 100)));
        assert!(cloudflare.cdn);
    }

    #[test]
    fn mobile_issues_lower_mobile_score() {
        let metrics = PerformanceMetrics {
            load_time: 800,
            first_contentful_paint: 0.0,
            largest_contentful_paint: 0.0,
            first_input_delay: 0.0,
            cumulative_layout_shift: 0.0,
            total_blocking_time: 0.0,
            speed_index: 0.0,
        };
        // No viewport tag: one issue, so 100 - floor(1000/100) - 10 = 80
        let mobile =
            analyze_mobile_performance(Some(&snapshot(&[], "<html></html>", 800)), &metrics);
        assert!(!mobile.viewport);
        assert_eq!(mobile.issues, vec!["Missing responsive viewport meta tag"]);
        assert_eq!(mobile.score, 80);
    }

    #[test]
    fn mobile_degrades_on_fetch_failure() {
        let metrics = measure_page_load(None, &FixedSignals::floor());
        let mobile = analyze_mobile_performance(None, &metrics);
        assert_eq!(mobile.score, 0);
        assert_eq!(mobile.issues, vec!["Failed to analyze mobile performance"]);
    }

    #[test]
    fn malformed_markup_does_not_panic() {
        let html = "<img src=\"unterminated <script <style>";
        let _ = analyze_resources(Some(&snapshot(&[], html, 100)), &FixedSignals::floor());
        let _ = analyze_network(Some(&snapshot(&[], html, 100)));
    }
}
