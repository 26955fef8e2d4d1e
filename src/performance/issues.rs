//! Performance issue generator.
//!
//! Rules run in a fixed declared order: Core Web Vitals first, then resource
//! optimization, then network, then one issue per mobile finding.

use crate::report::{Issue, Rating, Severity};

use super::types::{CoreWebVitals, MobilePerformance, NetworkAnalysis, ResourceAnalysis};

/// Derives the ordered performance issue list from the metric records.
pub fn generate_performance_issues(
    core_web_vitals: &CoreWebVitals,
    resources: &ResourceAnalysis,
    network: &NetworkAnalysis,
    mobile: &MobilePerformance,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if core_web_vitals.lcp.rating == Rating::Poor {
        issues.push(Issue::new(
            Severity::Critical,
            "Core Web Vitals",
            "Poor Largest Contentful Paint",
            format!(
                "LCP is {}ms, which is above the recommended 2.5s threshold.",
                core_web_vitals.lcp.value.round()
            ),
            "Optimize images, remove unused CSS/JS, and improve server response times",
            Some("Directly affects Google search rankings and user experience"),
        ));
    }

    if core_web_vitals.fid.rating == Rating::Poor {
        issues.push(Issue::new(
            Severity::High,
            "Core Web Vitals",
            "Poor First Input Delay",
            format!(
                "FID is {}ms, which is above the recommended 100ms threshold.",
                core_web_vitals.fid.value.round()
            ),
            "Reduce JavaScript execution time and break up long tasks",
            Some("Poor interactivity affects user engagement"),
        ));
    }

    if core_web_vitals.cls.rating == Rating::Poor {
        issues.push(Issue::new(
            Severity::High,
            "Core Web Vitals",
            "Poor Cumulative Layout Shift",
            format!(
                "CLS is {:.3}, which is above the recommended 0.1 threshold.",
                core_web_vitals.cls.value
            ),
            "Set dimensions for images and ads, avoid inserting content above existing content",
            Some("Layout shifts frustrate users and hurt search rankings"),
        ));
    }

    if resources.image_optimization.unoptimized_images > 5 {
        issues.push(Issue::new(
            Severity::Medium,
            "Image Optimization",
            "Unoptimized Images",
            format!(
                "{} images could be optimized for better performance.",
                resources.image_optimization.unoptimized_images
            ),
            "Convert images to WebP/AVIF format and implement responsive images",
            Some(&format!(
                "Potential savings of {}KB",
                resources.image_optimization.potential_savings
            )),
        ));
    }

    if resources.css_optimization.unused_css > 20 {
        issues.push(Issue::new(
            Severity::Medium,
            "CSS Optimization",
            "Unused CSS",
            format!(
                "Approximately {}% of CSS is unused.",
                resources.css_optimization.unused_css
            ),
            "Remove unused CSS and implement critical CSS loading",
            Some(&format!(
                "Potential savings of {}%",
                resources.css_optimization.minification_savings
            )),
        ));
    }

    if resources.js_optimization.unused_js > 25 {
        issues.push(Issue::new(
            Severity::Medium,
            "JavaScript Optimization",
            "Unused JavaScript",
            format!(
                "Approximately {}% of JavaScript is unused.",
                resources.js_optimization.unused_js
            ),
            "Implement code splitting and remove unused JavaScript",
            Some(&format!(
                "Potential savings of {}%",
                resources.js_optimization.minification_savings
            )),
        ));
    }

    if network.requests > 100 {
        issues.push(Issue::new(
            Severity::High,
            "Network",
            "Too Many HTTP Requests",
            format!(
                "{} HTTP requests detected, which can slow down page loading.",
                network.requests
            ),
            "Combine files, use CSS sprites, and implement resource bundling",
            Some("Each additional request adds latency"),
        ));
    }

    if !network.http2 {
        issues.push(Issue::new(
            Severity::Low,
            "Network",
            "HTTP/1.1 Protocol",
            "Website is not using HTTP/2 protocol for improved performance.",
            "Enable HTTP/2 on your server for better multiplexing",
            Some("HTTP/2 can improve loading performance by 10-20%"),
        ));
    }

    if !network.cdn {
        issues.push(Issue::new(
            Severity::Medium,
            "Network",
            "No CDN Detected",
            "No Content Delivery Network detected for static assets.",
            "Implement a CDN to serve static assets from locations closer to users",
            Some("CDN can reduce loading times by 20-50% globally"),
        ));
    }

    for mobile_issue in &mobile.issues {
        issues.push(Issue::new(
            Severity::Medium,
            "Mobile Performance",
            "Mobile Optimization Issue",
            mobile_issue.clone(),
            "Implement responsive design best practices",
            Some("Mobile users represent 50%+ of web traffic"),
        ));
    }

    issues
}
