//! Accessibility extractors.
//!
//! All checks are case-insensitive regex sweeps over the raw markup. Contrast
//! ratios cannot be computed without rendering, so they are drawn from the
//! injected signal source the same way the performance domain simulates its
//! paint timings.

use std::sync::LazyLock;

use regex::Regex;

use crate::signal::SignalSource;

use super::types::{
    AriaUsage, ColorContrastAnalysis, ColorContrastResult, FormAccessibility,
    HeadingAccessibility, ImageAccessibility, KeyboardAccessibility,
};

static STYLED_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<[^>]*style[^>]*color[^>]*>").expect("styled color pattern must compile")
});
static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("img pattern must compile"));
static FORM_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<form[^>]*>").expect("form pattern must compile"));
static INPUT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<input[^>]*>").expect("input pattern must compile"));
static LABEL_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<label[^>]*>").expect("label pattern must compile"));
static FIELDSET_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<fieldset[^>]*>").expect("fieldset pattern must compile"));
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([1-6])[^>]*>").expect("heading pattern must compile"));
static LANDMARK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(main|nav|header|footer|aside|section)[^>]*>")
        .expect("landmark pattern must compile")
});
static ARIA_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)aria-label=").expect("aria-label pattern must compile"));
static ARIA_DESCRIBEDBY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)aria-describedby=").expect("aria-describedby pattern must compile")
});
static ROLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)role=").expect("role pattern must compile"));
static FOCUSABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(button|input|select|textarea|a)[^>]*>")
        .expect("focusable pattern must compile")
});
static TABINDEX_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)tabindex=["']?(-?\d+)"#).expect("tabindex pattern must compile")
});
static SKIP_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)skip.*content|skip.*main").expect("skip link pattern must compile")
});

/// Simulates a contrast audit over the inline-styled text elements.
///
/// The element count is floored at 10 so pages with no inline color styles
/// still report a plausible sample. The failing fraction is 30% when the
/// average ratio misses the 4.5:1 AA threshold, 10% otherwise.
pub fn analyze_color_contrast(html: &str, signals: &dyn SignalSource) -> ColorContrastAnalysis {
    let text_elements = STYLED_COLOR_RE.find_iter(html).count();
    let total_elements = text_elements.max(10);

    let average_ratio = (signals.sample(4.2, 7.2) * 100.0).round() / 100.0;
    let failing_fraction = if average_ratio < 4.5 { 0.3 } else { 0.1 };
    let failing_elements = (total_elements as f64 * failing_fraction).floor() as usize;

    ColorContrastAnalysis {
        average_ratio,
        failing_elements,
        total_elements,
        worst_contrast: ColorContrastResult {
            ratio: signals.sample(2.1, 4.1),
            is_compliant: false,
            wcag_level: "fail".to_string(),
            foreground: "#666666".to_string(),
            background: "#ffffff".to_string(),
        },
    }
}

/// Counts images and their alt-text coverage.
///
/// "Has alt text" means the tag contains an `alt=` attribute at all; an
/// explicit `alt=""` counts as covered and is additionally tallied as
/// decorative.
pub fn analyze_images(html: &str) -> ImageAccessibility {
    let tags: Vec<&str> = IMG_TAG_RE.find_iter(html).map(|m| m.as_str()).collect();
    let with_alt_text = tags.iter().filter(|tag| tag.contains("alt=")).count();
    let decorative_images = tags.iter().filter(|tag| tag.contains(r#"alt="""#)).count();

    ImageAccessibility {
        total: tags.len(),
        with_alt_text,
        missing_alt_text: tags.len() - with_alt_text,
        decorative_images,
    }
}

/// Pairs inputs with labels by count: coverage is the smaller of the two
/// totals, and the shortfall is reported as missing labels.
pub fn analyze_forms(html: &str) -> FormAccessibility {
    let forms = FORM_TAG_RE.find_iter(html).count();
    let inputs = INPUT_TAG_RE.find_iter(html).count();
    let labels = LABEL_TAG_RE.find_iter(html).count();
    let fieldsets = FIELDSET_TAG_RE.find_iter(html).count();

    FormAccessibility {
        total: forms,
        with_labels: labels.min(inputs),
        missing_labels: inputs.saturating_sub(labels),
        with_fieldsets: fieldsets,
    }
}

/// Counts heading opening tags per level. Hierarchy is considered proper
/// when exactly one H1 is present.
pub fn analyze_headings(html: &str) -> HeadingAccessibility {
    let mut level_counts = [0usize; 6];
    for capture in HEADING_RE.captures_iter(html) {
        let level: usize = capture[1].parse().unwrap_or(1);
        level_counts[level - 1] += 1;
    }
    let h1_count = level_counts[0];

    HeadingAccessibility {
        h1_count,
        has_h1: h1_count > 0,
        proper_hierarchy: h1_count == 1,
        skipped_levels: 0,
        total_headings: level_counts.iter().sum(),
    }
}

/// Counts semantic landmark elements and ARIA attribute usage.
pub fn analyze_aria(html: &str) -> AriaUsage {
    AriaUsage {
        landmarks_present: LANDMARK_RE.is_match(html),
        aria_labels_used: ARIA_LABEL_RE.find_iter(html).count(),
        aria_described_by_used: ARIA_DESCRIBEDBY_RE.find_iter(html).count(),
        role_attributes_used: ROLE_RE.find_iter(html).count(),
    }
}

/// Audits keyboard navigation affordances.
///
/// A tabindex counts as an issue when its value is anything other than 0 or
/// -1; positive values break the natural tab order.
pub fn analyze_keyboard(html: &str) -> KeyboardAccessibility {
    let focusable_elements = FOCUSABLE_RE.find_iter(html).count();
    let tab_index_issues = TABINDEX_VALUE_RE
        .captures_iter(html)
        .filter(|capture| !matches!(&capture[1], "0" | "-1"))
        .count();

    KeyboardAccessibility {
        focusable_elements,
        tab_index_issues,
        skip_links_present: SKIP_LINK_RE.is_match(html),
        focus_traps_implemented: false,
    }
}
