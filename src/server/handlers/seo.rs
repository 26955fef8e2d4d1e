//! SEO analyze endpoint.

use axum::extract::State;
use axum::response::{Json, Response};
use log::error;
use tokio::time::timeout;

use crate::config::DOMAIN_ANALYSIS_TIMEOUT;
use crate::error_handling::AuditError;
use crate::seo::analyze_seo;
use crate::server::types::{error_response, success_response, AnalyzeRequest, AppState};

use super::parse_target;

const FAILURE_MESSAGE: &str = "SEO analysis failed";

/// `POST /api/seo/analyze`
///
/// The one endpoint where a failed page fetch is a client-visible 400 rather
/// than a degraded result: without the markup there is nothing to audit.
pub async fn seo_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let url = match parse_target(&request) {
        Ok(url) => url,
        Err(e) => return error_response(&e, FAILURE_MESSAGE),
    };

    match timeout(DOMAIN_ANALYSIS_TIMEOUT, analyze_seo(&state.fetcher, &url)).await {
        Ok(Ok(result)) => success_response(result),
        Ok(Err(e)) => {
            error!("SEO analysis of {url} failed: {e}");
            error_response(&e, FAILURE_MESSAGE)
        }
        Err(_) => {
            error!("SEO analysis of {url} timed out");
            error_response(&AuditError::Timeout, FAILURE_MESSAGE)
        }
    }
}
