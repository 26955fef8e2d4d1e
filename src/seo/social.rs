//! Social sharing tag extraction: Open Graph and Twitter Cards.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::types::{OpenGraphAnalysis, SocialMediaAnalysis, TwitterCardsAnalysis};

static OG_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[property='og:title']").expect("og:title selector must parse")
});
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[property='og:description']").expect("og:description selector must parse")
});
static OG_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[property='og:image']").expect("og:image selector must parse")
});
static TWITTER_CARD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='twitter:card']").expect("twitter:card selector must parse")
});
static TWITTER_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='twitter:title']").expect("twitter:title selector must parse")
});
static TWITTER_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='twitter:description']")
        .expect("twitter:description selector must parse")
});

fn meta_content(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// Audits the Open Graph and Twitter Card tags of a page.
pub fn analyze_social_media(html: &str) -> SocialMediaAnalysis {
    let document = Html::parse_document(html);

    let og_title = meta_content(&document, &OG_TITLE_SELECTOR);
    let og_description = meta_content(&document, &OG_DESCRIPTION_SELECTOR);
    let og_image = meta_content(&document, &OG_IMAGE_SELECTOR);

    let mut og_issues = Vec::new();
    if og_title.is_empty() {
        og_issues.push("Missing Open Graph title".to_string());
    }
    if og_description.is_empty() {
        og_issues.push("Missing Open Graph description".to_string());
    }
    if og_image.is_empty() {
        og_issues.push("Missing Open Graph image".to_string());
    }

    let twitter_card = meta_content(&document, &TWITTER_CARD_SELECTOR);
    let twitter_title = meta_content(&document, &TWITTER_TITLE_SELECTOR);
    let twitter_description = meta_content(&document, &TWITTER_DESCRIPTION_SELECTOR);

    let mut twitter_issues = Vec::new();
    if twitter_card.is_empty() {
        twitter_issues.push("Missing Twitter Card type".to_string());
    }
    if twitter_title.is_empty() {
        twitter_issues.push("Missing Twitter Card title".to_string());
    }
    if twitter_description.is_empty() {
        twitter_issues.push("Missing Twitter Card description".to_string());
    }

    SocialMediaAnalysis {
        open_graph: OpenGraphAnalysis {
            is_complete: !og_title.is_empty() && !og_description.is_empty() && !og_image.is_empty(),
            title: og_title,
            description: og_description,
            image: og_image,
            issues: og_issues,
        },
        twitter_cards: TwitterCardsAnalysis {
            is_complete: !twitter_card.is_empty()
                && !twitter_title.is_empty()
                && !twitter_description.is_empty(),
            card: twitter_card,
            title: twitter_title,
            description: twitter_description,
            issues: twitter_issues,
        },
    }
}
