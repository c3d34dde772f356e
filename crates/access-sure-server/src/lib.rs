//! # access-sure-server
//!
//! HTTP front end for the access-sure rule engine.
//!
//! A client calls `GET /audit?url=<page>`. The server asks the HTML source
//! provider for that page's markup, audits it, and answers with the
//! [`AuditResult`](access_sure::AuditResult) as JSON. Failures come back as
//! `{"error": "<message>"}` with status 400 for bad input and 500 otherwise.
//!
//! ```text
//! client ──GET /audit──▶ routes ──fetch_html──▶ ProviderClient ──▶ provider
//!                          │
//!                          └──spawn_blocking──▶ AuditService ──▶ AuditResult
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError};
pub use provider::{HtmlSource, ProviderClient, ProviderPage, DEFAULT_PROVIDER_URL};
pub use routes::{create_router, AppState, HealthResponse, DEFAULT_FETCH_TIMEOUT};
pub use server::AuditServer;
