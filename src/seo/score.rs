//! SEO scorer.

use crate::report::clamp_score;

use super::types::{
    ContentAnalysis, MetaTagsAnalysis, SocialMediaAnalysis, StructuredDataAnalysis,
    TechnicalSeoAnalysis,
};

/// Computes the SEO score as a weighted sum of five category sub-scores:
/// meta tags 30%, content 25%, technical 25%, social 10%, structured data 10%.
pub fn calculate_seo_score(
    meta_tags: &MetaTagsAnalysis,
    content: &ContentAnalysis,
    technical: &TechnicalSeoAnalysis,
    social: &SocialMediaAnalysis,
    structured: &StructuredDataAnalysis,
) -> u32 {
    let mut meta_score = 100.0;
    if !meta_tags.title.is_optimal {
        meta_score -= 20.0;
    }
    if !meta_tags.description.is_optimal {
        meta_score -= 20.0;
    }
    if !meta_tags.canonical.is_present {
        meta_score -= 10.0;
    }

    let mut content_score = 100.0;
    if content.headings.h1_count == 0 {
        content_score -= 25.0;
    }
    if content.headings.h1_count > 1 {
        content_score -= 15.0;
    }
    if content.content.word_count < 300 {
        content_score -= 20.0;
    }
    if content.images.without_alt > 0 {
        content_score -= 15.0;
    }

    let mut technical_score = 100.0;
    if !technical.sitemap.is_present {
        technical_score -= 20.0;
    }
    if !technical.robots_txt.is_present {
        technical_score -= 15.0;
    }
    if !technical.url_structure.is_clean {
        technical_score -= 15.0;
    }
    if !technical.page_speed.mobile_optimized {
        technical_score -= 20.0;
    }

    let mut social_score = 100.0;
    if !social.open_graph.is_complete {
        social_score -= 50.0;
    }
    if !social.twitter_cards.is_complete {
        social_score -= 30.0;
    }

    let structured_score = if structured.is_present { 100.0 } else { 50.0 };

    clamp_score(
        meta_score * 0.3
            + content_score * 0.25
            + technical_score * 0.25
            + social_score * 0.1
            + structured_score * 0.1,
    )
}


#[cfg(test)]
mod tests {
    use super::tests_support::{
        complete_social, healthy_content, optimal_meta, present_structured, solid_technical,
    };
    use super::*;

    #[test]
    fn perfect_page_scores_100() {
        let score = calculate_seo_score(
            &optimal_meta(),
            &healthy_content(),
            &solid_technical(),
            &complete_social(),
            &present_structured(),
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn missing_h1_costs_25_content_points() {
        let mut content = healthy_content();
        content.headings.h1_count = 0;
        let score = calculate_seo_score(
            &optimal_meta(),
            &content,
            &solid_technical(),
            &complete_social(),
            &present_structured(),
        );
        // 100*0.3 + 75*0.25 + 100*0.25 + 100*0.1 + 100*0.1 = 93.75 -> 94
        assert_eq!(score, 94);
    }

    #[test]
    fn absent_structured_data_earns_half_credit() {
        let structured = StructuredDataAnalysis {
            schemas: Vec::new(),
            is_present: false,
            is_valid: false,
            issues: vec!["No structured data found".to_string()],
        };
        let score = calculate_seo_score(
            &optimal_meta(),
            &healthy_content(),
            &solid_technical(),
            &complete_social(),
            &structured,
        );
        // Structured sub-score is 50 when absent: 100 - 0.1*50 = 95
        assert_eq!(score, 95);
    }

    #[test]
    fn worst_case_stays_above_zero() {
        let mut meta = optimal_meta();
        meta.title.is_optimal = false;
        meta.description.is_optimal = false;
        meta.canonical.is_present = false;
        let mut content = healthy_content();
        content.headings.h1_count = 0;
        content.content.word_count = 50;
        content.images.without_alt = 3;
        let mut technical = solid_technical();
        technical.sitemap.is_present = false;
        technical.robots_txt.is_present = false;
        technical.url_structure.is_clean = false;
        technical.page_speed.mobile_optimized = false;
        let mut social = complete_social();
        social.open_graph.is_complete = false;
        social.twitter_cards.is_complete = false;
        let structured = StructuredDataAnalysis {
            schemas: Vec::new(),
            is_present: false,
            is_valid: false,
            issues: Vec::new(),
        };
        let score = calculate_seo_score(&meta, &content, &technical, &social, &structured);
        // 50*0.3 + 40*0.25 + 30*0.25 + 20*0.1 + 50*0.1 = 39.5 -> 40
        assert_eq!(score, 40);
    }
}
