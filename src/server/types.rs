//! API request/response envelope types and shared handler state.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error_handling::AuditError;
use crate::fetch::Fetcher;
use crate::signal::SignalSource;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client shared by all audit domains
    pub fetcher: Fetcher,
    /// Simulated measurement source for performance and contrast figures
    pub signals: Arc<dyn SignalSource>,
}

/// Request body for all analyze endpoints.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Audit target; missing or null surfaces as `Valid URL is required`
    pub url: Option<String>,
}

/// Wraps a successful analysis in the `{"success": true, "data": ...}`
/// envelope.
pub fn success_response<T: Serialize>(data: T) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

/// Maps an audit error to its `{"error": ...}` response.
///
/// Input and fetch errors are the client's problem (400) and carry the exact
/// error message; timeouts and internal failures answer 500 with the domain's
/// fixed failure message so internals never leak.
pub fn error_response(err: &AuditError, internal_message: &str) -> Response {
    let (status, message) = match err {
        AuditError::InvalidUrl | AuditError::UrlRequired | AuditError::PageUnavailable(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        AuditError::Timeout | AuditError::Internal(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, internal_message.to_string())
        }
    };
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn input_errors_answer_400_with_exact_message() {
        let response = error_response(&AuditError::UrlRequired, "Security analysis failed");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&AuditError::InvalidUrl, "Security analysis failed");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_answer_500_with_domain_message() {
        let response = error_response(
            &AuditError::Internal(anyhow!("boom")),
            "Performance analysis failed",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn timeout_is_an_internal_failure() {
        let response = error_response(&AuditError::Timeout, "SEO analysis failed");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
