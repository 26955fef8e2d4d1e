//! Accessibility issue generator.
//!
//! Rules run in a fixed declared order: images, forms, headings, ARIA,
//! keyboard. Every issue carries a WCAG conformance level and the element it
//! concerns.

use crate::report::{Issue, Severity, WcagLevel};

use super::types::AccessibilityDetails;

#[allow(clippy::too_many_arguments)]
fn accessibility_issue(
    severity: Severity,
    category: &str,
    title: &str,
    description: String,
    recommendation: &str,
    impact: &str,
    wcag_level: WcagLevel,
    element: &str,
) -> Issue {
    Issue {
        severity,
        category: category.to_string(),
        title: title.to_string(),
        description,
        recommendation: recommendation.to_string(),
        impact: Some(impact.to_string()),
        wcag_level: Some(wcag_level),
        element: Some(element.to_string()),
    }
}

/// Derives the ordered accessibility issue list from the metric records.
pub fn generate_accessibility_issues(details: &AccessibilityDetails) -> Vec<Issue> {
    let mut issues = Vec::new();

    if details.images.missing_alt_text > 0 {
        issues.push(accessibility_issue(
            Severity::High,
            "Images",
            "Missing Alt Text",
            format!(
                "{} images are missing alternative text",
                details.images.missing_alt_text
            ),
            r#"Add descriptive alt text to all images or use alt="" for decorative images"#,
            "Screen readers cannot describe images to visually impaired users",
            WcagLevel::A,
            "img",
        ));
    }

    if details.forms.missing_labels > 0 {
        issues.push(accessibility_issue(
            Severity::High,
            "Forms",
            "Form Fields Missing Labels",
            format!(
                "{} form fields are missing proper labels",
                details.forms.missing_labels
            ),
            "Associate all form fields with descriptive labels using <label> elements",
            "Users with screen readers cannot understand form field purposes",
            WcagLevel::A,
            "input",
        ));
    }

    if !details.headings.has_h1 {
        issues.push(accessibility_issue(
            Severity::Medium,
            "Headings",
            "Missing H1 Heading",
            "Page is missing a main H1 heading".to_string(),
            "Add a single, descriptive H1 heading to the page",
            "Screen readers and SEO tools cannot identify the main page topic",
            WcagLevel::AA,
            "h1",
        ));
    }

    if details.headings.h1_count > 1 {
        issues.push(accessibility_issue(
            Severity::Medium,
            "Headings",
            "Multiple H1 Headings",
            format!(
                "Page has {} H1 headings, should have only one",
                details.headings.h1_count
            ),
            "Use only one H1 heading per page for the main title",
            "Confuses screen readers and affects content hierarchy",
            WcagLevel::AA,
            "h1",
        ));
    }

    if !details.aria.landmarks_present {
        issues.push(accessibility_issue(
            Severity::Medium,
            "ARIA",
            "Missing Landmark Elements",
            "Page lacks semantic landmark elements for navigation".to_string(),
            "Use semantic HTML5 elements like <main>, <nav>, <header>, <footer>",
            "Screen reader users cannot easily navigate page sections",
            WcagLevel::AA,
            "semantic elements",
        ));
    }

    if !details.keyboard.skip_links_present && details.keyboard.focusable_elements > 5 {
        issues.push(accessibility_issue(
            Severity::Medium,
            "Keyboard Navigation",
            "Missing Skip Links",
            "Page lacks skip navigation links for keyboard users".to_string(),
            r#"Add "Skip to main content" links at the beginning of the page"#,
            "Keyboard users must tab through all navigation to reach main content",
            WcagLevel::A,
            "navigation",
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::tests_support::clean_details;

    #[test]
    fn clean_page_produces_no_issues() {
        assert!(generate_accessibility_issues(&clean_details()).is_empty());
    }

    #[test]
    fn missing_alt_text_carries_wcag_metadata() {
        let mut details = clean_details();
        details.images.missing_alt_text = 3;
        let issues = generate_accessibility_issues(&details);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].title, "Missing Alt Text");
        assert_eq!(issues[0].description, "3 images are missing alternative text");
        assert_eq!(issues[0].wcag_level, Some(WcagLevel::A));
        assert_eq!(issues[0].element.as_deref(), Some("img"));
        assert_eq!(issues[0].severity, Severity::High);
    }

    #[test]
    fn missing_and_multiple_h1_are_mutually_exclusive() {
        let mut details = clean_details();
        details.headings.h1_count = 0;
        details.headings.has_h1 = false;
        details.headings.proper_hierarchy = false;
        let issues = generate_accessibility_issues(&details);
        let titles: Vec<&str> = issues.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Missing H1 Heading"]);

        details.headings.h1_count = 3;
        details.headings.has_h1 = true;
        let issues = generate_accessibility_issues(&details);
        let titles: Vec<&str> = issues.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Multiple H1 Headings"]);
        assert_eq!(issues[0].description, "Page has 3 H1 headings, should have only one");
    }

    #[test]
    fn rules_emit_in_declaration_order() {
        let mut details = clean_details();
        details.images.missing_alt_text = 1;
        details.forms.missing_labels = 1;
        details.aria.landmarks_present = false;
        details.keyboard.skip_links_present = false;
        details.keyboard.focusable_elements = 10;
        let issues = generate_accessibility_issues(&details);
        let categories: Vec<&str> = issues.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, vec!["Images", "Forms", "ARIA", "Keyboard Navigation"]);
    }
}
