//! Performance recommendation generator.

use crate::report::{Issue, Severity};

use super::types::{NetworkAnalysis, ResourceAnalysis};

/// Derives the priority-ordered recommendation list.
///
/// Conditional priority entries come first; the compression and lazy-loading
/// entries are always appended regardless of findings, so the list is never
/// empty.
pub fn generate_performance_recommendations(
    issues: &[Issue],
    resources: &ResourceAnalysis,
    network: &NetworkAnalysis,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if issues
        .iter()
        .any(|i| i.category == "Core Web Vitals" && i.severity == Severity::Critical)
    {
        recommendations.push(
            "Focus on Core Web Vitals optimization as top priority for SEO and user experience"
                .to_string(),
        );
    }

    if resources.image_optimization.unoptimized_images > 0 {
        recommendations.push(
            "Implement next-generation image formats (WebP, AVIF) and responsive images"
                .to_string(),
        );
    }

    if resources.css_optimization.unused_css > 15 || resources.js_optimization.unused_js > 20 {
        recommendations
            .push("Audit and remove unused CSS/JavaScript to reduce bundle sizes".to_string());
    }

    if !network.cdn {
        recommendations.push(
            "Implement a Content Delivery Network (CDN) for global performance improvement"
                .to_string(),
        );
    }

    if network.requests > 50 {
        recommendations
            .push("Optimize resource loading with bundling, minification, and compression".to_string());
    }

    if resources.caching.cache_hit_ratio < 0.8 {
        recommendations.push("Implement proper caching strategies for static assets".to_string());
    }

    // Fixed tail, always present
    recommendations.push("Enable gzip/brotli compression for text-based resources".to_string());
    recommendations
        .push("Implement lazy loading for images and non-critical resources".to_string());

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::types::{
        CachingAnalysis, CssOptimization, ImageOptimization, JsOptimization,
    };

    fn resources() -> ResourceAnalysis {
        ResourceAnalysis {
            total_size: 0,
            image_optimization: ImageOptimization {
                unoptimized_images: 0,
                potential_savings: 0,
                formats: Vec::new(),
            },
            css_optimization: CssOptimization {
                unused_css: 0,
                minification_savings: 0,
                critical_css: true,
            },
            js_optimization: JsOptimization {
                unused_js: 0,
                minification_savings: 0,
                bundle_size: 0,
            },
            caching: CachingAnalysis {
                cacheable: 80,
                non_cacheable: 20,
                cache_hit_ratio: 0.9,
            },
        }
    }

    fn network() -> NetworkAnalysis {
        NetworkAnalysis {
            requests: 10,
            transfer_size: 0,
            compression_ratio: 0.7,
            http2: true,
            cdn: true,
            keep_alive: true,
        }
    }

    #[test]
    fn boilerplate_tail_always_present() {
        let recs = generate_performance_recommendations(&[], &resources(), &network());
        assert_eq!(recs.len(), 2);
        assert!(recs[recs.len() - 2].contains("gzip/brotli"));
        assert!(recs[recs.len() - 1].contains("lazy loading"));
    }

    #[test]
    fn critical_vitals_issue_triggers_priority_entry() {
        let issue = Issue::new(
            Severity::Critical,
            "Core Web Vitals",
            "Poor Largest Contentful Paint",
            "LCP is 9000ms",
            "Optimize images",
            None,
        );
        let recs = generate_performance_recommendations(&[issue], &resources(), &network());
        assert!(recs[0].contains("Core Web Vitals optimization as top priority"));
        // Tail still present after the priority entry
        assert!(recs[recs.len() - 1].contains("lazy loading"));
    }
}
