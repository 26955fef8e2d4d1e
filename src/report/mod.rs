//! Shared report vocabulary: issue records, severities, ratings, and grades.
//!
//! Every audit domain derives its score and issue list independently, but
//! they all speak this vocabulary. Issue ordering is insertion order from
//! each domain's issue generator; nothing here sorts by severity.

use serde::Serialize;

/// Issue severity, most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// WCAG conformance level attached to accessibility issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

/// A single audit finding.
///
/// `impact` is omitted on security issues and `wcag_level`/`element` appear
/// only on accessibility issues, matching the original report format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub severity: Severity,
    pub category: String,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wcag_level: Option<WcagLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl Issue {
    /// Builds an issue without the optional accessibility fields.
    pub fn new(
        severity: Severity,
        category: &str,
        title: &str,
        description: impl Into<String>,
        recommendation: &str,
        impact: Option<&str>,
    ) -> Self {
        Self {
            severity,
            category: category.to_string(),
            title: title.to_string(),
            description: description.into(),
            recommendation: recommendation.to_string(),
            impact: impact.map(str::to_string),
            wcag_level: None,
            element: None,
        }
    }
}

/// Core Web Vitals rating buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "needs-improvement")]
    NeedsImprovement,
    #[serde(rename = "poor")]
    Poor,
}

/// Clamps a raw weighted score to the integer range [0, 100].
///
/// Rounds first, then clamps, so 100.4 becomes 100 and -3.0 becomes 0.
pub fn clamp_score(raw: f64) -> u32 {
    raw.round().clamp(0.0, 100.0) as u32
}

/// Letter grade used by the performance and SEO domains.
///
/// A≥90, B≥80, C≥70, D≥60, else F. Security reports carry no grade.
pub fn letter_grade(score: u32) -> &'static str {
    match score {
        90..=100 => "A",
        80..=89 => "B",
        70..=79 => "C",
        60..=69 => "D",
        _ => "F",
    }
}

/// Finer-grained grade used by the accessibility domain.
///
/// A+≥95, A≥85, B≥75, C≥65, D≥50, else F.
pub fn accessibility_grade(score: u32) -> &'static str {
    match score {
        95..=100 => "A+",
        85..=94 => "A",
        75..=84 => "B",
        65..=74 => "C",
        50..=64 => "D",
        _ => "F",
    }
}

/// Current UTC timestamp in RFC 3339 format, stamped on every result envelope.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds_are_inclusive() {
        assert_eq!(letter_grade(90), "A");
        assert_eq!(letter_grade(89), "B");
        assert_eq!(letter_grade(60), "D");
        assert_eq!(letter_grade(59), "F");
    }

    #[test]
    fn accessibility_grades_use_finer_table() {
        assert_eq!(accessibility_grade(95), "A+");
        assert_eq!(accessibility_grade(94), "A");
        assert_eq!(accessibility_grade(50), "D");
        assert_eq!(accessibility_grade(49), "F");
    }

    #[test]
    fn clamp_rounds_then_limits() {
        assert_eq!(clamp_score(100.4), 100);
        assert_eq!(clamp_score(104.0), 100);
        assert_eq!(clamp_score(-3.0), 0);
        assert_eq!(clamp_score(69.5), 70);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamp_always_in_range(raw in -1e6f64..1e6f64) {
            let score = clamp_score(raw);
            prop_assert!(score <= 100);
        }

        #[test]
        fn every_score_has_a_grade(score in 0u32..=100) {
            prop_assert!(!letter_grade(score).is_empty());
            prop_assert!(!accessibility_grade(score).is_empty());
        }
    }
}
