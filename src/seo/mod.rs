//! SEO audit domain.
//!
//! Unlike the other domains, SEO cannot degrade to pessimistic defaults: the
//! whole audit reads the page markup, so a failed fetch aborts the run with
//! [`AuditError::PageUnavailable`].

mod content;
mod issues;
mod meta_tags;
mod recommendations;
pub(crate) mod score;
mod social;
mod structured;
mod technical;
mod types;

use log::info;
use url::Url;

use crate::config::SEO_SCANNER_UA;
use crate::error_handling::{AuditError, FetchError};
use crate::fetch::Fetcher;
use crate::report::{letter_grade, timestamp_now};

pub use content::analyze_content;
pub use issues::generate_seo_issues;
pub use meta_tags::analyze_meta_tags;
pub use recommendations::generate_seo_recommendations;
pub use score::calculate_seo_score;
pub use social::analyze_social_media;
pub use structured::analyze_structured_data;
pub use technical::analyze_technical_seo;
pub use types::{
    CanonicalCheck, ContentAnalysis, DescriptionCheck, HeadingAnalysis, ImageAltAnalysis,
    LinkAnalysis, MetaTagsAnalysis, OpenGraphAnalysis, PageSpeedAnalysis, PresenceCheck,
    RobotsTxtAnalysis, SeoAnalysisResult, SeoDetails, SitemapAnalysis, SocialMediaAnalysis,
    StructuredDataAnalysis, TechnicalSeoAnalysis, TextAnalysis, TitleCheck, TwitterCardsAnalysis,
    UrlStructureAnalysis,
};

/// Runs the full SEO analysis for a normalized target URL.
///
/// One GET supplies the markup for every extractor; the technical check adds
/// its own sitemap and robots.txt probes against the site origin.
pub async fn analyze_seo(fetcher: &Fetcher, url: &Url) -> Result<SeoAnalysisResult, AuditError> {
    let target = url.as_str();
    let page = fetcher
        .get(target, SEO_SCANNER_UA)
        .await
        .map_err(AuditError::PageUnavailable)?;
    if !page.ok {
        return Err(AuditError::PageUnavailable(FetchError::Status(page.status)));
    }
    let html = &page.body;

    let meta_tags = analyze_meta_tags(html);
    let content = analyze_content(html, url);
    let technical = analyze_technical_seo(fetcher, url, html).await;
    let social = analyze_social_media(html);
    let structured = analyze_structured_data(html);

    let score = calculate_seo_score(&meta_tags, &content, &technical, &social, &structured);
    let issues = generate_seo_issues(&meta_tags, &content, &technical, &social, &structured);
    let recommendations = generate_seo_recommendations(&issues, &content);
    let grade = letter_grade(score).to_string();

    info!("SEO analysis of {target}: score {score} ({grade}), {} issues", issues.len());

    Ok(SeoAnalysisResult {
        url: target.to_string(),
        timestamp: timestamp_now(),
        score,
        grade,
        issues,
        recommendations,
        details: SeoDetails {
            meta_tags,
            content_analysis: content,
            technical_seo: technical,
            social_media: social,
            structured_data: structured,
        },
    })
}
