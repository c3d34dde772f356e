//! Audit server implementation.

use std::future::Future;
use std::sync::Arc;

use access_sure::AuditService;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::provider::ProviderClient;
use crate::routes::{create_router, AppState};

/// The audit server.
pub struct AuditServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl AuditServer {
    /// Create a server that fetches pages from the configured provider.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let provider = ProviderClient::new(config.provider_url.clone())?;
        let service = AuditService::with_options(config.audit_options());
        let state = AppState::new(Arc::new(provider), service)
            .with_fetch_timeout(config.fetch_timeout());
        Ok(Self::with_state(config, Arc::new(state)))
    }

    /// Create a server with pre-built state.
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        self.config.addr()
    }

    /// Bind the configured address. Host names are resolved.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind(self.addr()).await
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;

        info!(
            "Audit server listening on {} (provider {})",
            addr, self.config.provider_url
        );
        self.serve(listener, shutdown_signal()).await?;

        info!("Audit server stopped");
        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = create_router(self.state.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
