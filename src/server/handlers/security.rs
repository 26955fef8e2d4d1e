//! Security analyze endpoint.

use axum::extract::State;
use axum::response::{Json, Response};
use log::error;
use tokio::time::timeout;

use crate::config::DOMAIN_ANALYSIS_TIMEOUT;
use crate::error_handling::AuditError;
use crate::security::analyze_security;
use crate::server::types::{error_response, success_response, AnalyzeRequest, AppState};

use super::parse_target;

const FAILURE_MESSAGE: &str = "Security analysis failed";

/// `POST /api/security/analyze`
pub async fn security_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let url = match parse_target(&request) {
        Ok(url) => url,
        Err(e) => return error_response(&e, FAILURE_MESSAGE),
    };

    match timeout(DOMAIN_ANALYSIS_TIMEOUT, analyze_security(&state.fetcher, &url)).await {
        Ok(result) => success_response(result),
        Err(_) => {
            error!("Security analysis of {url} timed out");
            error_response(&AuditError::Timeout, FAILURE_MESSAGE)
        }
    }
}
