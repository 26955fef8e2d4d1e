//! Meta tag extraction.
//!
//! Parses the document once with `scraper` and reads the title, description,
//! keywords, robots, and canonical tags. Length checks count characters, not
//! bytes.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::types::{CanonicalCheck, DescriptionCheck, MetaTagsAnalysis, PresenceCheck, TitleCheck};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector must parse"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='description']").expect("description selector must parse")
});
static META_KEYWORDS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='keywords']").expect("keywords selector must parse")
});
static META_ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name='robots']").expect("robots selector must parse"));
static CANONICAL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("link[rel='canonical']").expect("canonical selector must parse")
});

fn first_content(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
}

/// Audits the head-level meta tags of a page.
pub fn analyze_meta_tags(html: &str) -> MetaTagsAnalysis {
    let document = Html::parse_document(html);

    let title_content = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    let title_length = title_content.chars().count();
    let mut title_issues = Vec::new();
    if title_content.is_empty() {
        title_issues.push("Missing title tag".to_string());
    } else if title_length < 30 {
        title_issues.push("Title too short (recommended: 30-60 characters)".to_string());
    } else if title_length > 60 {
        title_issues.push("Title too long (recommended: 30-60 characters)".to_string());
    }

    let description_content =
        first_content(&document, &META_DESCRIPTION_SELECTOR, "content").unwrap_or_default();
    let description_length = description_content.chars().count();
    let mut description_issues = Vec::new();
    if description_content.is_empty() {
        description_issues.push("Missing meta description".to_string());
    } else if description_length < 120 {
        description_issues.push("Description too short (recommended: 120-160 characters)".to_string());
    } else if description_length > 160 {
        description_issues.push("Description too long (recommended: 120-160 characters)".to_string());
    }

    let keywords_content =
        first_content(&document, &META_KEYWORDS_SELECTOR, "content").unwrap_or_default();
    let robots_content =
        first_content(&document, &META_ROBOTS_SELECTOR, "content").unwrap_or_default();
    let canonical_url = first_content(&document, &CANONICAL_SELECTOR, "href").unwrap_or_default();

    MetaTagsAnalysis {
        title: TitleCheck {
            is_optimal: (30..=60).contains(&title_length),
            content: title_content,
            length: title_length,
            issues: title_issues,
        },
        description: DescriptionCheck {
            is_optimal: (120..=160).contains(&description_length),
            content: description_content,
            length: description_length,
            issues: description_issues,
        },
        keywords: PresenceCheck {
            is_present: !keywords_content.is_empty(),
            issues: if keywords_content.is_empty() {
                vec!["Meta keywords not found (optional but can be helpful)".to_string()]
            } else {
                Vec::new()
            },
            content: keywords_content,
        },
        robots: PresenceCheck {
            is_present: !robots_content.is_empty(),
            issues: if robots_content.is_empty() {
                vec!["Robots meta tag not found".to_string()]
            } else {
                Vec::new()
            },
            content: robots_content,
        },
        canonical: CanonicalCheck {
            is_present: !canonical_url.is_empty(),
            issues: if canonical_url.is_empty() {
                vec!["Canonical URL not specified".to_string()]
            } else {
                Vec::new()
            },
            url: canonical_url,
        },
    }
}
