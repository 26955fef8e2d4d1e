//! Accessibility recommendation generator.

use crate::report::{Issue, Severity};

/// Derives the priority-ordered recommendation list.
///
/// Severity-triggered entries come first; three process entries are always
/// appended regardless of findings, so the list is never empty.
pub fn generate_accessibility_recommendations(issues: &[Issue]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if issues.iter().any(|i| i.severity == Severity::Critical) {
        recommendations.push(
            "Address critical accessibility issues immediately to ensure basic usability"
                .to_string(),
        );
    }

    if issues.iter().any(|i| i.severity == Severity::High) {
        recommendations
            .push("Fix high-priority issues to improve screen reader compatibility".to_string());
    }

    // Fixed tail, always present
    recommendations
        .push("Implement keyboard navigation testing in your development workflow".to_string());
    recommendations.push("Use automated accessibility testing tools during development".to_string());
    recommendations.push("Conduct user testing with assistive technology users".to_string());

    recommendations
}
