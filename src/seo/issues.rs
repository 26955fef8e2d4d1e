//! SEO issue generator.
//!
//! Rules run in a fixed declared order: meta tags, content structure and
//! quality, images, technical, mobile, social, structured data. Meta tag
//! issues join their sub-findings into a single description.

use crate::report::{Issue, Severity};

use super::types::{
    ContentAnalysis, MetaTagsAnalysis, SocialMediaAnalysis, StructuredDataAnalysis,
    TechnicalSeoAnalysis,
};

/// Derives the ordered SEO issue list from the metric records.
pub fn generate_seo_issues(
    meta_tags: &MetaTagsAnalysis,
    content: &ContentAnalysis,
    technical: &TechnicalSeoAnalysis,
    social: &SocialMediaAnalysis,
    structured: &StructuredDataAnalysis,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !meta_tags.title.issues.is_empty() {
        issues.push(Issue::new(
            Severity::Critical,
            "Meta Tags",
            "Title Tag Issues",
            meta_tags.title.issues.join(", "),
            "Optimize title tag to 30-60 characters with target keywords",
            Some("Title tags are crucial for search rankings and click-through rates"),
        ));
    }

    if !meta_tags.description.issues.is_empty() {
        issues.push(Issue::new(
            Severity::High,
            "Meta Tags",
            "Meta Description Issues",
            meta_tags.description.issues.join(", "),
            "Write compelling meta description of 120-160 characters",
            Some("Meta descriptions affect click-through rates from search results"),
        ));
    }

    if content.headings.h1_count == 0 {
        issues.push(Issue::new(
            Severity::Critical,
            "Content Structure",
            "Missing H1 Heading",
            "No H1 heading found on the page",
            "Add a unique H1 heading that describes the page content",
            Some("H1 headings help search engines understand page topic"),
        ));
    }

    if content.headings.h1_count > 1 {
        issues.push(Issue::new(
            Severity::Medium,
            "Content Structure",
            "Multiple H1 Headings",
            format!("{} H1 headings found", content.headings.h1_count),
            "Use only one H1 heading per page for better SEO",
            Some("Multiple H1s can confuse search engines about page focus"),
        ));
    }

    if content.content.word_count < 300 {
        issues.push(Issue::new(
            Severity::Medium,
            "Content Quality",
            "Insufficient Content",
            format!("Only {} words found", content.content.word_count),
            "Add more valuable content (recommended: 300+ words)",
            Some("Thin content may not rank well in search results"),
        ));
    }

    if content.images.without_alt > 0 {
        issues.push(Issue::new(
            Severity::Medium,
            "Image Optimization",
            "Missing Alt Text",
            format!("{} images missing alt text", content.images.without_alt),
            "Add descriptive alt text to all images",
            Some("Alt text improves accessibility and image search rankings"),
        ));
    }

    if !technical.sitemap.is_present {
        issues.push(Issue::new(
            Severity::High,
            "Technical SEO",
            "Missing XML Sitemap",
            "No XML sitemap found",
            "Create and submit XML sitemap to search engines",
            Some("Sitemaps help search engines discover and index pages"),
        ));
    }

    if !technical.robots_txt.is_present {
        issues.push(Issue::new(
            Severity::Medium,
            "Technical SEO",
            "Missing Robots.txt",
            "No robots.txt file found",
            "Create robots.txt file to guide search engine crawling",
            Some("Robots.txt helps control how search engines access your site"),
        ));
    }

    if !technical.page_speed.mobile_optimized {
        issues.push(Issue::new(
            Severity::High,
            "Mobile SEO",
            "Not Mobile Optimized",
            "Missing viewport meta tag for mobile optimization",
            "Add viewport meta tag and ensure responsive design",
            Some("Mobile optimization is crucial for search rankings"),
        ));
    }

    if !social.open_graph.is_complete {
        issues.push(Issue::new(
            Severity::Low,
            "Social Media",
            "Incomplete Open Graph Tags",
            "Missing Open Graph title, description, or image",
            "Add complete Open Graph tags for better social sharing",
            Some("Open Graph tags control how content appears when shared"),
        ));
    }

    if !structured.is_present {
        issues.push(Issue::new(
            Severity::Low,
            "Structured Data",
            "No Structured Data",
            "No structured data markup found",
            "Add JSON-LD structured data for better search visibility",
            Some("Structured data can enable rich snippets in search results"),
        ));
    }

    issues
}
