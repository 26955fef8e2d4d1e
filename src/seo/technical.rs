//! Technical SEO checks: URL shape, sitemap and robots.txt probes, mobile
//! viewport readiness.

use url::Url;

use crate::config::SEO_SCANNER_UA;
use crate::fetch::Fetcher;

use super::types::{
    PageSpeedAnalysis, RobotsTxtAnalysis, SitemapAnalysis, TechnicalSeoAnalysis,
    UrlStructureAnalysis,
};

fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Audits the crawlability surface of a site.
///
/// Issues a HEAD probe for `/sitemap.xml` and a GET for `/robots.txt` at the
/// site origin. Probe failures degrade to "not present" rather than erroring
/// the audit.
pub async fn analyze_technical_seo(fetcher: &Fetcher, url: &Url, html: &str) -> TechnicalSeoAnalysis {
    let target = url.as_str();
    let has_parameters = url.query().is_some_and(|q| !q.is_empty());
    let url_length = target.len();
    let is_clean = !has_parameters && !target.contains("index.") && url_length < 100;

    let mut url_issues = Vec::new();
    if has_parameters {
        url_issues.push("URL contains parameters (may affect SEO)".to_string());
    }
    if url_length > 100 {
        url_issues.push("URL too long (recommended: under 100 characters)".to_string());
    }
    if !is_clean {
        url_issues.push("URL structure could be more SEO-friendly".to_string());
    }

    let site = origin(url);
    let sitemap_url = format!("{site}/sitemap.xml");
    let robots_url = format!("{site}/robots.txt");
    let (sitemap_ok, robots_page) = tokio::join!(
        fetcher.probe(&sitemap_url, SEO_SCANNER_UA),
        fetcher.get(&robots_url, SEO_SCANNER_UA),
    );

    let (robots_present, robots_valid) = match robots_page {
        Ok(page) if page.ok => (true, page.body.contains("User-agent:")),
        _ => (false, false),
    };

    let mut sitemap_issues = Vec::new();
    if !sitemap_ok {
        sitemap_issues.push("XML sitemap not found".to_string());
    }

    let mut robots_issues = Vec::new();
    if !robots_present {
        robots_issues.push("robots.txt file not found".to_string());
    } else if !robots_valid {
        robots_issues.push("robots.txt file invalid or empty".to_string());
    }

    let has_viewport = html.contains("viewport");
    let mobile_optimized = has_viewport && html.contains("width=device-width");

    TechnicalSeoAnalysis {
        url_structure: UrlStructureAnalysis {
            is_clean,
            has_parameters,
            length: url_length,
            issues: url_issues,
        },
        sitemap: SitemapAnalysis {
            is_present: sitemap_ok,
            is_accessible: sitemap_ok,
            issues: sitemap_issues,
        },
        robots_txt: RobotsTxtAnalysis {
            is_present: robots_present,
            is_valid: robots_valid,
            issues: robots_issues,
        },
        page_speed: PageSpeedAnalysis {
            load_time: 0,
            mobile_optimized,
            issues: if has_viewport {
                Vec::new()
            } else {
                vec!["Missing viewport meta tag for mobile".to_string()]
            },
        },
    }
}
