//! HTTP route definitions.
//!
//! ```text
//! GET /audit?url=<page>  - Fetch the page through the provider and audit it
//! GET /health            - Liveness check with the crate version
//! ```

use std::sync::Arc;
use std::time::Duration;

use access_sure::{AuditResult, AuditService};
use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::error::ServerError;
use crate::provider::HtmlSource;

/// Default time allowed for the provider to answer
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared, read-only state for every request.
pub struct AppState {
    pub source: Arc<dyn HtmlSource>,
    pub service: Arc<AuditService>,
    pub fetch_timeout: Duration,
}

impl AppState {
    pub fn new(source: Arc<dyn HtmlSource>, service: AuditService) -> Self {
        Self {
            source,
            service: Arc::new(service),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the router with CORS and request tracing.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/audit", get(audit))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn audit(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<AuditResult>, ServerError> {
    let url = query
        .as_deref()
        .and_then(first_url_param)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(ServerError::missing_url)?;

    // Dropping the handler (client gone) also abandons the fetch
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let fetch = state.source.fetch_html(&url, cancel.clone());
    let page = match tokio::time::timeout(state.fetch_timeout, fetch).await {
        Ok(Ok(page)) => page,
        Ok(Err(e)) => {
            warn!(%url, error = %e, "Provider fetch failed");
            return Err(e);
        }
        Err(_) => {
            cancel.cancel();
            warn!(%url, timeout = ?state.fetch_timeout, "Provider fetch timed out");
            return Err(ServerError::Timeout(state.fetch_timeout));
        }
    };

    let service = state.service.clone();
    let result = tokio::task::spawn_blocking(move || service.audit_html(&page.html))
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))??;

    info!(%url, score = result.score, failed = result.suggestions.len(), "Audit complete");
    Ok(Json(result))
}

/// First `url` pair in a raw query string; later repeats are ignored
fn first_url_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
