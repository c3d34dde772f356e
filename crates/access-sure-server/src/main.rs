//! access-sure-server binary.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use access_sure_server::{AuditServer, ServerConfig};

fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    init_tracing(config.log_json);

    info!(
        extended_rules = config.extended_rules,
        prefixed_suggestions = config.prefixed_suggestions,
        "Starting access-sure-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    AuditServer::new(config)?.run().await
}
