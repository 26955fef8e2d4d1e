//! Accessibility report data structures.

use serde::Serialize;

use crate::report::Issue;

/// Contrast measurement for a single element pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorContrastResult {
    pub ratio: f64,
    pub is_compliant: bool,
    /// "A", "AA", "AAA", or "fail"
    pub wcag_level: String,
    pub foreground: String,
    pub background: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorContrastAnalysis {
    pub average_ratio: f64,
    pub failing_elements: usize,
    pub total_elements: usize,
    pub worst_contrast: ColorContrastResult,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAccessibility {
    pub total: usize,
    pub with_alt_text: usize,
    pub missing_alt_text: usize,
    /// Images carrying an explicit empty `alt=""`
    pub decorative_images: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAccessibility {
    pub total: usize,
    pub with_labels: usize,
    pub missing_labels: usize,
    pub with_fieldsets: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingAccessibility {
    /// Raw H1 tally; feeds the issue text but is not part of the report shape
    #[serde(skip)]
    pub h1_count: usize,
    pub has_h1: bool,
    pub proper_hierarchy: bool,
    /// Always 0; level-skip detection is out of scope
    pub skipped_levels: usize,
    pub total_headings: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaUsage {
    pub landmarks_present: bool,
    pub aria_labels_used: usize,
    pub aria_described_by_used: usize,
    pub role_attributes_used: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardAccessibility {
    pub focusable_elements: usize,
    /// Elements with a tabindex other than "0" or "-1"
    pub tab_index_issues: usize,
    pub skip_links_present: bool,
    /// Always false; focus-trap detection is out of scope
    pub focus_traps_implemented: bool,
}

/// Per-conformance-level compliance percentages derived from the issue list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagCompliance {
    pub level_a: u32,
    pub level_aa: u32,
    pub level_aaa: u32,
}

/// All accessibility metric records for one audit run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityDetails {
    pub color_contrast: ColorContrastAnalysis,
    pub images: ImageAccessibility,
    pub forms: FormAccessibility,
    pub headings: HeadingAccessibility,
    pub aria: AriaUsage,
    pub keyboard: KeyboardAccessibility,
}

/// The accessibility result envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityAnalysisResult {
    pub url: String,
    pub score: u32,
    pub grade: String,
    pub wcag_compliance: WcagCompliance,
    pub details: AccessibilityDetails,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub scan_timestamp: String,
}
