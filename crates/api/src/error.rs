use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use gameverse_core::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for provider errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from one of the upstream clients.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a provider error into an HTTP status, error code, and message.
///
/// The message is what callers see: upstream status codes are embedded
/// for diagnostics, raw upstream bodies and credential material are not.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        // Misconfiguration, not an upstream fault: 503 so operators can
        // tell "set the credentials" apart from "provider is down".
        CoreError::MissingCredentials => (
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            "Game catalog is not configured".to_string(),
        ),
        CoreError::UpstreamAuth { status } => {
            tracing::error!(upstream_status = status, "upstream authentication failed");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_AUTH",
                "Upstream authentication failed".to_string(),
            )
        }
        CoreError::UpstreamProtocol { status, message } => {
            tracing::error!(upstream_status = status, error = %message, "upstream protocol error");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                format!("Upstream service failed with status {status}"),
            )
        }
        CoreError::Transport(message) => {
            tracing::error!(error = %message, "upstream unreachable");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_UNREACHABLE",
                "Upstream service is unreachable".to_string(),
            )
        }
        CoreError::UpstreamTimeout => (
            StatusCode::GATEWAY_TIMEOUT,
            "UPSTREAM_TIMEOUT",
            "Upstream request timed out".to_string(),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
    }
}
