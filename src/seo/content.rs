//! Content extraction: headings, text metrics, image alt coverage, links.
//!
//! All checks are regex sweeps over the raw markup rather than a DOM walk;
//! heading counts match opening tags only, so unclosed elements still count.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::types::{ContentAnalysis, HeadingAnalysis, ImageAltAnalysis, LinkAnalysis, TextAnalysis};

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>").expect("h1 pattern must compile"));
static H2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h2[^>]*>").expect("h2 pattern must compile"));
static H3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h3[^>]*>").expect("h3 pattern must compile"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern must compile"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));
static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("img pattern must compile"));
static ALT_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"alt=["'][^"']*["']"#).expect("alt pattern must compile"));
static A_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]+href=["'][^"']*["'][^>]*>"#).expect("anchor pattern must compile")
});
static SENTENCE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern must compile"));

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Counts syllables as runs of consecutive vowels, with a floor of one per
/// word.
fn count_syllables(word: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in word.chars() {
        if is_vowel(c) {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs.max(1)
}

/// Flesch Reading Ease approximation, clamped to [0, 100]. Zero when the text
/// has no sentences or no words.
fn readability_score(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentences = SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    if sentences == 0 || words.is_empty() {
        return 0.0;
    }
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let score = 206.835
        - 1.015 * (words.len() as f64 / sentences as f64)
        - 84.6 * (syllables as f64 / words.len() as f64);
    score.clamp(0.0, 100.0)
}

/// Audits headings, text, images, and links in the page markup.
///
/// `page_url` supplies the hostname for the internal-link test: a link counts
/// as internal when its tag carries no absolute scheme or mentions the page's
/// own host.
pub fn analyze_content(html: &str, page_url: &Url) -> ContentAnalysis {
    let h1_count = H1_RE.find_iter(html).count();
    let h2_count = H2_RE.find_iter(html).count();
    let h3_count = H3_RE.find_iter(html).count();

    let mut structure = Vec::new();
    if h1_count > 0 {
        structure.push(format!("H1 ({h1_count})"));
    }
    if h2_count > 0 {
        structure.push(format!("H2 ({h2_count})"));
    }
    if h3_count > 0 {
        structure.push(format!("H3 ({h3_count})"));
    }

    let mut heading_issues = Vec::new();
    if h1_count == 0 {
        heading_issues.push("No H1 heading found".to_string());
    }
    if h1_count > 1 {
        heading_issues.push("Multiple H1 headings found (should be unique)".to_string());
    }
    if h2_count == 0 {
        heading_issues.push("No H2 headings found".to_string());
    }

    let stripped = TAG_RE.replace_all(html, " ");
    let text = WHITESPACE_RE.replace_all(&stripped, " ");
    let text = text.trim();
    let word_count = text.split_whitespace().count();
    let readability = readability_score(text);

    let mut content_issues = Vec::new();
    if word_count < 300 {
        content_issues.push("Content too short (recommended: 300+ words)".to_string());
    }
    if word_count > 2000 {
        content_issues.push("Content very long (consider breaking into sections)".to_string());
    }
    if readability < 30.0 {
        content_issues.push("Content may be difficult to read".to_string());
    }

    let img_tags: Vec<&str> = IMG_TAG_RE.find_iter(html).map(|m| m.as_str()).collect();
    let with_alt = img_tags.iter().filter(|tag| ALT_ATTR_RE.is_match(tag)).count();
    let without_alt = img_tags.len() - with_alt;

    let host = page_url.host_str().unwrap_or_default();
    let link_tags: Vec<&str> = A_HREF_RE.find_iter(html).map(|m| m.as_str()).collect();
    let internal = link_tags
        .iter()
        .filter(|link| {
            (!link.contains("http://") && !link.contains("https://"))
                || (!host.is_empty() && link.contains(host))
        })
        .count();
    let external = link_tags.len() - internal;

    let mut link_issues = Vec::new();
    if internal == 0 {
        link_issues.push("No internal links found".to_string());
    }
    if external > internal * 2 {
        link_issues.push("Too many external links compared to internal".to_string());
    }

    ContentAnalysis {
        headings: HeadingAnalysis {
            h1_count,
            h2_count,
            h3_count,
            structure,
            issues: heading_issues,
        },
        content: TextAnalysis {
            word_count,
            readability_score: readability,
            keyword_density: 0.0,
            issues: content_issues,
        },
        images: ImageAltAnalysis {
            total: img_tags.len(),
            with_alt,
            without_alt,
            issues: if without_alt > 0 {
                vec![format!("{without_alt} images missing alt text")]
            } else {
                Vec::new()
            },
        },
        links: LinkAnalysis {
            internal,
            external,
            broken: 0,
            issues: link_issues,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/").expect("test url must parse")
    }

    #[test]
    fn syllable_counting_collapses_vowel_runs() {
        assert_eq!(count_syllables("queue"), 1); // "ueue" is one contiguous run
        assert_eq!(count_syllables("strength"), 1);
        assert_eq!(count_syllables("rhythm"), 1); // no vowels, floor of one
        assert_eq!(count_syllables("audio"), 2); // au + io
    }

    #[test]
    fn heading_counts_match_opening_tags() {
        let html = "<h1>One</h1><h1 class=\"x\">Two</h1><h2>Sub</h2><h3>Deep";
        let content = analyze_content(html, &page_url());
        assert_eq!(content.headings.h1_count, 2);
        assert_eq!(content.headings.h2_count, 1);
        assert_eq!(content.headings.h3_count, 1);
        assert_eq!(
            content.headings.structure,
            vec!["H1 (2)".to_string(), "H2 (1)".to_string(), "H3 (1)".to_string()]
        );
        assert!(content
            .headings
            .issues
            .contains(&"Multiple H1 headings found (should be unique)".to_string()));
    }

    #[test]
    fn missing_headings_flagged() {
        let content = analyze_content("<p>body</p>", &page_url());
        assert_eq!(
            content.headings.issues,
            vec!["No H1 heading found".to_string(), "No H2 headings found".to_string()]
        );
    }

    #[test]
    fn alt_coverage_counts_quoted_attributes() {
        let html = r#"<img src="a.png" alt="a"><img src="b.png"><img src="c.png" alt="">"#;
        let content = analyze_content(html, &page_url());
        assert_eq!(content.images.total, 3);
        assert_eq!(content.images.with_alt, 2); // empty alt="" still counts
        assert_eq!(content.images.without_alt, 1);
        assert_eq!(content.images.issues, vec!["1 images missing alt text".to_string()]);
    }

    #[test]
    fn links_split_by_host() {
        let html = concat!(
            r#"<a href="/about">About</a>"#,
            r#"<a href="https://example.com/blog">Blog</a>"#,
            r#"<a href="https://other.org/x">Other</a>"#,
        );
        let content = analyze_content(html, &page_url());
        assert_eq!(content.links.internal, 2);
        assert_eq!(content.links.external, 1);
        assert!(content.links.issues.is_empty());
    }

    #[test]
    fn empty_page_has_zero_readability() {
        let content = analyze_content("", &page_url());
        assert_eq!(content.content.word_count, 0);
        assert_eq!(content.content.readability_score, 0.0);
    }

    #[test]
    fn readability_stays_in_range() {
        // Dense polysyllabic text would push the raw formula negative
        let html = "<p>Incomprehensibility accountability disproportionality \
                    institutionalization overcapitalization.</p>";
        let content = analyze_content(html, &page_url());
        assert!(content.content.readability_score >= 0.0);
        assert!(content.content.readability_score <= 100.0);
    }
}
