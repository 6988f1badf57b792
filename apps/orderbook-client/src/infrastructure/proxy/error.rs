//! Ask proxy error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors from the ask proxy.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Upstream could not be reached or its response could not be read.
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failure_is_bad_gateway() {
        let response = ProxyError::Upstream("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
