//! Accessibility scorer and WCAG compliance tallies.

use crate::report::{clamp_score, Issue, WcagLevel};

use super::types::{AccessibilityDetails, WcagCompliance};

/// Computes the accessibility score from fixed penalties on each record.
///
/// Starts at 100: contrast below 4.5:1 costs 20; missing alt text costs 5 per
/// image capped at 25; missing labels cost 10 each capped at 20; no H1 costs
/// 15; no landmarks costs 10; no skip links on a page with more than five
/// focusable elements costs 10.
pub fn calculate_accessibility_score(details: &AccessibilityDetails) -> u32 {
    let mut score = 100.0;

    if details.color_contrast.average_ratio < 4.5 {
        score -= 20.0;
    }

    if details.images.missing_alt_text > 0 {
        score -= (details.images.missing_alt_text as f64 * 5.0).min(25.0);
    }

    if details.forms.missing_labels > 0 {
        score -= (details.forms.missing_labels as f64 * 10.0).min(20.0);
    }

    if !details.headings.has_h1 {
        score -= 15.0;
    }

    if !details.aria.landmarks_present {
        score -= 10.0;
    }

    if !details.keyboard.skip_links_present && details.keyboard.focusable_elements > 5 {
        score -= 10.0;
    }

    clamp_score(score)
}

/// Derives per-level compliance percentages from the issue list: each level-A
/// issue costs 15 points, level-AA 10, level-AAA 5, floored at zero.
pub fn calculate_wcag_compliance(issues: &[Issue]) -> WcagCompliance {
    let count = |level: WcagLevel| {
        issues
            .iter()
            .filter(|i| i.wcag_level == Some(level))
            .count() as u32
    };

    WcagCompliance {
        level_a: 100u32.saturating_sub(count(WcagLevel::A) * 15),
        level_aa: 100u32.saturating_sub(count(WcagLevel::AA) * 10),
        level_aaa: 100u32.saturating_sub(count(WcagLevel::AAA) * 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::tests_support::clean_details;
    use crate::report::Severity;

    #[test]
    fn clean_page_scores_100() {
        assert_eq!(calculate_accessibility_score(&clean_details()), 100);
    }

    #[test]
    fn alt_text_penalty_caps_at_25() {
        let mut details = clean_details();
        details.images.missing_alt_text = 2;
        assert_eq!(calculate_accessibility_score(&details), 90);
        details.images.missing_alt_text = 40;
        assert_eq!(calculate_accessibility_score(&details), 75);
    }

    #[test]
    fn label_penalty_caps_at_20() {
        let mut details = clean_details();
        details.forms.missing_labels = 1;
        assert_eq!(calculate_accessibility_score(&details), 90);
        details.forms.missing_labels = 10;
        assert_eq!(calculate_accessibility_score(&details), 80);
    }

    #[test]
    fn skip_link_penalty_needs_enough_focusables() {
        let mut details = clean_details();
        details.keyboard.skip_links_present = false;
        details.keyboard.focusable_elements = 5;
        assert_eq!(calculate_accessibility_score(&details), 100);
        details.keyboard.focusable_elements = 6;
        assert_eq!(calculate_accessibility_score(&details), 90);
    }

    #[test]
    fn stacked_penalties_floor_at_zero() {
        let mut details = clean_details();
        details.color_contrast.average_ratio = 3.0;
        details.images.missing_alt_text = 10;
        details.forms.missing_labels = 5;
        details.headings.has_h1 = false;
        details.aria.landmarks_present = false;
        details.keyboard.skip_links_present = false;
        details.keyboard.focusable_elements = 20;
        // 100 - 20 - 25 - 20 - 15 - 10 - 10 = 0
        assert_eq!(calculate_accessibility_score(&details), 0);
    }

    fn issue_at(level: WcagLevel) -> Issue {
        Issue {
            severity: Severity::Medium,
            category: "Images".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            recommendation: "r".to_string(),
            impact: Some("i".to_string()),
            wcag_level: Some(level),
            element: Some("img".to_string()),
        }
    }

    #[test]
    fn compliance_deducts_per_level() {
        let issues = vec![
            issue_at(WcagLevel::A),
            issue_at(WcagLevel::A),
            issue_at(WcagLevel::AA),
        ];
        let compliance = calculate_wcag_compliance(&issues);
        assert_eq!(compliance.level_a, 70);
        assert_eq!(compliance.level_aa, 90);
        assert_eq!(compliance.level_aaa, 100);
    }

    #[test]
    fn compliance_floors_at_zero() {
        let issues: Vec<Issue> = (0..8).map(|_| issue_at(WcagLevel::A)).collect();
        assert_eq!(calculate_wcag_compliance(&issues).level_a, 0);
    }
}
