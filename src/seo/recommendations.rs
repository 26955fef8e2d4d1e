//! SEO recommendation generator.

use crate::report::{Issue, Severity};

use super::types::ContentAnalysis;

/// Derives the priority-ordered recommendation list.
///
/// Conditional priority entries come first; four general entries are always
/// appended regardless of findings, so the list is never empty.
pub fn generate_seo_recommendations(issues: &[Issue], content: &ContentAnalysis) -> Vec<String> {
    let mut recommendations = Vec::new();

    if issues
        .iter()
        .any(|i| i.category == "Meta Tags" && i.severity == Severity::Critical)
    {
        recommendations.push("Optimize title tags and meta descriptions as top priority".to_string());
    }

    if content.headings.h1_count == 0 {
        recommendations.push("Add a unique, descriptive H1 heading to each page".to_string());
    }

    if content.content.word_count < 300 {
        recommendations.push("Expand content with valuable, relevant information".to_string());
    }

    if content.images.without_alt > 0 {
        recommendations
            .push("Add descriptive alt text to all images for accessibility and SEO".to_string());
    }

    // Fixed tail, always present
    recommendations.push("Create and submit XML sitemap to search engines".to_string());
    recommendations.push("Implement structured data markup for rich snippets".to_string());
    recommendations.push("Optimize for mobile devices with responsive design".to_string());
    recommendations.push("Add Open Graph tags for better social media sharing".to_string());

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::score::tests_support::healthy_content;

    #[test]
    fn boilerplate_tail_always_present() {
        let recs = generate_seo_recommendations(&[], &healthy_content());
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0], "Create and submit XML sitemap to search engines");
        assert_eq!(recs[3], "Add Open Graph tags for better social media sharing");
    }

    #[test]
    fn critical_meta_issue_triggers_priority_entry() {
        let issue = Issue::new(
            Severity::Critical,
            "Meta Tags",
            "Title Tag Issues",
            "Missing title tag",
            "Optimize title tag to 30-60 characters with target keywords",
            Some("Title tags are crucial for search rankings and click-through rates"),
        );
        let recs = generate_seo_recommendations(&[issue], &healthy_content());
        assert_eq!(recs[0], "Optimize title tags and meta descriptions as top priority");
        assert_eq!(recs.len(), 5);
    }

    #[test]
    fn content_gaps_add_targeted_entries() {
        let mut content = healthy_content();
        content.headings.h1_count = 0;
        content.content.word_count = 120;
        content.images.without_alt = 2;
        let recs = generate_seo_recommendations(&[], &content);
        assert_eq!(recs[0], "Add a unique, descriptive H1 heading to each page");
        assert_eq!(recs[1], "Expand content with valuable, relevant information");
        assert_eq!(
            recs[2],
            "Add descriptive alt text to all images for accessibility and SEO"
        );
        assert_eq!(recs.len(), 7);
    }
}
