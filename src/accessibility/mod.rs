//! Accessibility audit domain.
//!
//! Fetch failures are terminal for this domain: with no markup there is
//! nothing to audit, so the run surfaces an internal error rather than a
//! degraded result.

mod extractors;
mod issues;
mod recommendations;
mod score;
mod types;

use anyhow::anyhow;
use log::info;
use url::Url;

use crate::config::ACCESSIBILITY_SCANNER_UA;
use crate::error_handling::AuditError;
use crate::fetch::Fetcher;
use crate::report::{accessibility_grade, timestamp_now};
use crate::signal::SignalSource;

pub use extractors::{
    analyze_aria, analyze_color_contrast, analyze_forms, analyze_headings, analyze_images,
    analyze_keyboard,
};
pub use issues::generate_accessibility_issues;
pub use recommendations::generate_accessibility_recommendations;
pub use score::{calculate_accessibility_score, calculate_wcag_compliance};
pub use types::{
    AccessibilityAnalysisResult, AccessibilityDetails, AriaUsage, ColorContrastAnalysis,
    ColorContrastResult, FormAccessibility, HeadingAccessibility, ImageAccessibility,
    KeyboardAccessibility, WcagCompliance,
};

/// Runs the full accessibility analysis for a normalized target URL.
pub async fn analyze_accessibility(
    fetcher: &Fetcher,
    url: &Url,
    signals: &dyn SignalSource,
) -> Result<AccessibilityAnalysisResult, AuditError> {
    let target = url.as_str();
    let page = fetcher
        .get(target, ACCESSIBILITY_SCANNER_UA)
        .await
        .map_err(|e| AuditError::Internal(anyhow!("failed to fetch {target}: {e}")))?;
    if !page.ok {
        return Err(AuditError::Internal(anyhow!(
            "failed to fetch {target}: status {}",
            page.status
        )));
    }
    let html = &page.body;

    let details = AccessibilityDetails {
        color_contrast: analyze_color_contrast(html, signals),
        images: analyze_images(html),
        forms: analyze_forms(html),
        headings: analyze_headings(html),
        aria: analyze_aria(html),
        keyboard: analyze_keyboard(html),
    };

    let issues = generate_accessibility_issues(&details);
    let wcag_compliance = calculate_wcag_compliance(&issues);
    let score = calculate_accessibility_score(&details);
    let recommendations = generate_accessibility_recommendations(&issues);
    let grade = accessibility_grade(score).to_string();

    info!(
        "Accessibility analysis of {target}: score {score} ({grade}), {} issues",
        issues.len()
    );

    Ok(AccessibilityAnalysisResult {
        url: target.to_string(),
        score,
        grade,
        wcag_compliance,
        details,
        issues,
        recommendations,
        scan_timestamp: timestamp_now(),
    })
}

/// Well-formed metric fixtures shared by the scorer and issue generator tests.
#[cfg(test)]
pub(crate) mod tests_support {
    use super::types::{
        AccessibilityDetails, AriaUsage, ColorContrastAnalysis, ColorContrastResult,
        FormAccessibility, HeadingAccessibility, ImageAccessibility, KeyboardAccessibility,
    };

    pub(crate) fn clean_details() -> AccessibilityDetails {
        AccessibilityDetails {
            color_contrast: ColorContrastAnalysis {
                average_ratio: 5.7,
                failing_elements: 1,
                total_elements: 10,
                worst_contrast: ColorContrastResult {
                    ratio: 3.1,
                    is_compliant: false,
                    wcag_level: "fail".to_string(),
                    foreground: "#666666".to_string(),
                    background: "#ffffff".to_string(),
                },
            },
            images: ImageAccessibility {
                total: 4,
                with_alt_text: 4,
                missing_alt_text: 0,
                decorative_images: 1,
            },
            forms: FormAccessibility {
                total: 1,
                with_labels: 2,
                missing_labels: 0,
                with_fieldsets: 1,
            },
            headings: HeadingAccessibility {
                h1_count: 1,
                has_h1: true,
                proper_hierarchy: true,
                skipped_levels: 0,
                total_headings: 6,
            },
            aria: AriaUsage {
                landmarks_present: true,
                aria_labels_used: 3,
                aria_described_by_used: 1,
                role_attributes_used: 2,
            },
            keyboard: KeyboardAccessibility {
                focusable_elements: 12,
                tab_index_issues: 0,
                skip_links_present: true,
                focus_traps_implemented: false,
            },
        }
    }
}
