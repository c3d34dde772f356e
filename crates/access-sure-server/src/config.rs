//! Command-line and environment configuration.

use std::time::Duration;

use access_sure::{AuditOptions, RulePreset, SuggestionStyle};
use clap::Parser;
use url::Url;

use crate::provider::DEFAULT_PROVIDER_URL;

/// access-sure HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "access-sure-server")]
#[command(about = "Fetch web pages and audit them for accessibility")]
#[command(version)]
pub struct ServerConfig {
    /// Server host
    #[arg(long, env = "ACCESS_SURE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(long, env = "ACCESS_SURE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the HTML source provider
    #[arg(long, env = "ACCESS_SURE_PROVIDER_URL", default_value = DEFAULT_PROVIDER_URL)]
    pub provider_url: Url,

    /// Seconds to wait for the provider before giving up
    #[arg(long, env = "ACCESS_SURE_FETCH_TIMEOUT_SECS", default_value_t = 5)]
    pub fetch_timeout_secs: u64,

    /// Also run the keyboard access and autoplay checks
    #[arg(long, env = "ACCESS_SURE_EXTENDED_RULES")]
    pub extended_rules: bool,

    /// Prefix suggestions with "Suggestion for: "
    #[arg(long, env = "ACCESS_SURE_PREFIXED_SUGGESTIONS")]
    pub prefixed_suggestions: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "ACCESS_SURE_LOG_JSON")]
    pub log_json: bool,
}

impl ServerConfig {
    /// Listen address as `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Engine options selected by the flags
    pub fn audit_options(&self) -> AuditOptions {
        AuditOptions {
            suggestion_style: if self.prefixed_suggestions {
                SuggestionStyle::Prefixed
            } else {
                SuggestionStyle::Bare
            },
            preset: if self.extended_rules {
                RulePreset::Extended
            } else {
                RulePreset::Standard
            },
            ..Default::default()
        }
    }
}
