//! Client for the remote HTML source provider.
//!
//! The provider renders a page on its side and answers
//! `GET <base>/fetch-html?url=<page>` with `{"html": ..., "css"?: ..., "js"?: ...}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::error::ServerError;

/// Default provider endpoint
pub const DEFAULT_PROVIDER_URL: &str = "https://source-render-api.onrender.com";

/// Markup returned by the provider for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderPage {
    pub html: String,
    pub css: Option<String>,
    pub js: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    html: Option<String>,
    css: Option<String>,
    js: Option<String>,
}

/// Something that can turn a page URL into its HTML.
#[async_trait]
pub trait HtmlSource: Send + Sync {
    /// Fetch the markup for `url`. Cancelling `cancel` abandons the fetch.
    async fn fetch_html(
        &self,
        url: &str,
        cancel: CancellationToken,
    ) -> Result<ProviderPage, ServerError>;
}

/// HTTP client for the provider service
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ProviderClient {
    pub fn new(base_url: Url) -> Result<Self, ServerError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("access-sure/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Provider URL for a page, with the page URL percent-encoded.
    /// Spaces become `%20`, never `+`.
    pub fn endpoint(&self, page_url: &str) -> Result<Url, ServerError> {
        let mut endpoint = self.base_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| {
                ServerError::Internal(format!("Invalid provider URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("fetch-html");
        endpoint.query_pairs_mut().clear().append_pair("url", page_url);
        // a literal '+' is already %2B, so every '+' left is a space
        let query = endpoint.query().map(|query| query.replace('+', "%20"));
        endpoint.set_query(query.as_deref());
        Ok(endpoint)
    }

    async fn fetch(&self, endpoint: Url) -> Result<ProviderPage, ServerError> {
        let response = self.client.get(endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServerError::Fetch {
                status: status.as_u16(),
            });
        }

        let body: ProviderResponse = response.json().await?;
        match body.html {
            Some(html) if !html.is_empty() => Ok(ProviderPage {
                html,
                css: body.css,
                js: body.js,
            }),
            _ => Err(ServerError::MissingContent),
        }
    }
}

#[async_trait]
impl HtmlSource for ProviderClient {
    async fn fetch_html(
        &self,
        url: &str,
        cancel: CancellationToken,
    ) -> Result<ProviderPage, ServerError> {
        let endpoint = self.endpoint(url)?;
        debug!(%endpoint, "Fetching page from provider");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ServerError::Cancelled),
            result = self.fetch(endpoint) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ProviderClient {
        ProviderClient::new(Url::parse(&server.uri()).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint() {
        let client = ProviderClient::new(Url::parse(DEFAULT_PROVIDER_URL).unwrap()).unwrap();
        let endpoint = client.endpoint("https://example.com/a b?c=1&d=2").unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://source-render-api.onrender.com/fetch-html?url=https%3A%2F%2Fexample.com%2Fa%20b%3Fc%3D1%26d%3D2"
        );
    }

    #[test]
    fn test_endpoint_keeps_literal_plus() {
        let client = ProviderClient::new(Url::parse(DEFAULT_PROVIDER_URL).unwrap()).unwrap();
        let endpoint = client.endpoint("https://example.com/?q=c++ lang").unwrap();
        assert_eq!(
            endpoint.query(),
            Some("url=https%3A%2F%2Fexample.com%2F%3Fq%3Dc%2B%2B%20lang")
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("http://localhost:9000/render/").unwrap();
        let client = ProviderClient::new(base).unwrap();
        let endpoint = client.endpoint("https://example.com").unwrap();
        assert_eq!(endpoint.path(), "/render/fetch-html");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetch-html"))
            .and(query_param("url", "https://example.com/pricing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "html": "<main><h1>Pricing</h1></main>",
                "css": "h1 { color: black }"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client_for(&server)
            .fetch_html("https://example.com/pricing", CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(page.html, "<main><h1>Pricing</h1></main>");
        assert_eq!(page.css.as_deref(), Some("h1 { color: black }"));
        assert_eq!(page.js, None);
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetch-html"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_html("https://example.com", CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Fetch { status: 502 }));
        assert_eq!(err.to_string(), "Failed to fetch page: 502");
    }

    #[tokio::test]
    async fn test_fetch_missing_html() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("url", "https://example.com/none"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "css": "body {}"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("url", "https://example.com/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "html": ""
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        for url in ["https://example.com/none", "https://example.com/empty"] {
            let err = client
                .fetch_html(url, CancellationToken::new())
                .await
                .unwrap_err();
            assert!(matches!(err, ServerError::MissingContent), "{}: {:?}", url, err);
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_html("https://example.com", CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Request(_)));
    }

    #[tokio::test]
    async fn test_fetch_cancelled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"html": "<p>late</p>"}))
                    .set_delay(Duration::from_secs(30)),
            )
            .mount(&server)
            .await;

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let err = client_for(&server)
            .fetch_html("https://example.com", cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Cancelled));
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        let base = Url::parse("http://127.0.0.1:9").unwrap();
        let err = ProviderClient::new(base)
            .unwrap()
            .fetch_html("https://example.com", CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Request(_)));
    }
}
