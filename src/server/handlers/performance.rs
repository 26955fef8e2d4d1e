//! Performance analyze endpoint.

use axum::extract::State;
use axum::response::{Json, Response};
use log::error;
use tokio::time::timeout;

use crate::config::DOMAIN_ANALYSIS_TIMEOUT;
use crate::error_handling::AuditError;
use crate::performance::analyze_performance;
use crate::server::types::{error_response, success_response, AnalyzeRequest, AppState};

use super::parse_target;

const FAILURE_MESSAGE: &str = "Performance analysis failed";

/// `POST /api/performance/analyze`
pub async fn performance_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let url = match parse_target(&request) {
        Ok(url) => url,
        Err(e) => return error_response(&e, FAILURE_MESSAGE),
    };

    let analysis = analyze_performance(&state.fetcher, &url, state.signals.as_ref());
    match timeout(DOMAIN_ANALYSIS_TIMEOUT, analysis).await {
        Ok(result) => success_response(result),
        Err(_) => {
            error!("Performance analysis of {url} timed out");
            error_response(&AuditError::Timeout, FAILURE_MESSAGE)
        }
    }
}
