//! Server error types and the JSON error envelope.

use std::time::Duration;

use access_sure::AuditError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the audit endpoint
#[derive(Debug, Error)]
pub enum ServerError {
    /// Bad client input.
    #[error("{0}")]
    Validation(String),

    /// The provider answered with a non-success status.
    #[error("Failed to fetch page: {status}")]
    Fetch { status: u16 },

    /// The provider answered without any HTML.
    #[error("No HTML found in the response")]
    MissingContent,

    /// Transport failure or an unreadable provider body.
    #[error("Request to HTML provider failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The fetched page could not be audited.
    #[error(transparent)]
    Parse(#[from] AuditError),

    /// The provider did not answer in time.
    #[error("Timed out after {}s waiting for the HTML provider", .0.as_secs())]
    Timeout(Duration),

    /// The fetch was cancelled before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// Generic error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn missing_url() -> Self {
        Self::Validation("URL parameter is required".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Audit request failed");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
