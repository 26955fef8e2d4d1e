//! Accessibility analyze endpoint.

use axum::extract::State;
use axum::response::{Json, Response};
use log::error;
use tokio::time::timeout;

use crate::accessibility::analyze_accessibility;
use crate::config::DOMAIN_ANALYSIS_TIMEOUT;
use crate::error_handling::AuditError;
use crate::server::types::{error_response, success_response, AnalyzeRequest, AppState};

use super::parse_target;

const FAILURE_MESSAGE: &str = "Failed to analyze accessibility";

/// `POST /api/accessibility`
pub async fn accessibility_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let url = match parse_target(&request) {
        Ok(url) => url,
        Err(e) => return error_response(&e, FAILURE_MESSAGE),
    };

    let analysis = analyze_accessibility(&state.fetcher, &url, state.signals.as_ref());
    match timeout(DOMAIN_ANALYSIS_TIMEOUT, analysis).await {
        Ok(Ok(result)) => success_response(result),
        Ok(Err(e)) => {
            error!("Accessibility analysis of {url} failed: {e}");
            error_response(&e, FAILURE_MESSAGE)
        }
        Err(_) => {
            error!("Accessibility analysis of {url} timed out");
            error_response(&AuditError::Timeout, FAILURE_MESSAGE)
        }
    }
}
