//! SEO report data structures.
//!
//! Each record carries an embedded `issues: Vec<String>` sub-list used only
//! for display; the cross-cutting issue generator consumes the whole record,
//! not these sub-lists.

use serde::Serialize;

use crate::report::Issue;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCheck {
    pub content: String,
    pub length: usize,
    /// 30-60 characters inclusive
    pub is_optimal: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionCheck {
    pub content: String,
    pub length: usize,
    /// 120-160 characters inclusive
    pub is_optimal: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceCheck {
    pub content: String,
    pub is_present: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalCheck {
    pub url: String,
    pub is_present: bool,
    pub issues: Vec<String>,
}

/// Meta tag audit: title, description, keywords, robots, canonical.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagsAnalysis {
    pub title: TitleCheck,
    pub description: DescriptionCheck,
    pub keywords: PresenceCheck,
    pub robots: PresenceCheck,
    pub canonical: CanonicalCheck,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingAnalysis {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub structure: Vec<String>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub word_count: usize,
    /// Flesch Reading Ease approximation, clamped to [0, 100]
    pub readability_score: f64,
    /// Always 0; keyword analysis is out of scope
    pub keyword_density: f64,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAltAnalysis {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAnalysis {
    pub internal: usize,
    pub external: usize,
    /// Always 0; link checking is out of scope
    pub broken: usize,
    pub issues: Vec<String>,
}

/// Content audit: headings, text, images, links.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub headings: HeadingAnalysis,
    pub content: TextAnalysis,
    pub images: ImageAltAnalysis,
    pub links: LinkAnalysis,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlStructureAnalysis {
    pub is_clean: bool,
    pub has_parameters: bool,
    pub length: usize,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapAnalysis {
    pub is_present: bool,
    pub is_accessible: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsTxtAnalysis {
    pub is_present: bool,
    /// Valid iff the body contains the literal `User-agent:`
    pub is_valid: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedAnalysis {
    /// Populated by the performance domain, not here
    pub load_time: u64,
    pub mobile_optimized: bool,
    pub issues: Vec<String>,
}

/// Technical SEO audit: URL shape, sitemap, robots.txt, mobile readiness.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSeoAnalysis {
    pub url_structure: UrlStructureAnalysis,
    pub sitemap: SitemapAnalysis,
    pub robots_txt: RobotsTxtAnalysis,
    pub page_speed: PageSpeedAnalysis,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphAnalysis {
    pub title: String,
    pub description: String,
    pub image: String,
    pub is_complete: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCardsAnalysis {
    pub card: String,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    pub issues: Vec<String>,
}

/// Social sharing tag audit: Open Graph and Twitter Cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaAnalysis {
    pub open_graph: OpenGraphAnalysis,
    pub twitter_cards: TwitterCardsAnalysis,
}

/// Structured data audit: JSON-LD and microdata schema types.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataAnalysis {
    pub schemas: Vec<String>,
    pub is_present: bool,
    pub is_valid: bool,
    pub issues: Vec<String>,
}

/// All SEO metric records for one audit run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoDetails {
    pub meta_tags: MetaTagsAnalysis,
    pub content_analysis: ContentAnalysis,
    pub technical_seo: TechnicalSeoAnalysis,
    pub social_media: SocialMediaAnalysis,
    pub structured_data: StructuredDataAnalysis,
}

/// The SEO result envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysisResult {
    pub url: String,
    pub timestamp: String,
    pub score: u32,
    pub grade: String,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub details: SeoDetails,
}
