//! Retrieval of the listing page.
//!
//! [`FetchDocument`] is the seam between the pipeline and the network: the
//! pipeline only needs "give me the parsed page for this origin, or tell me
//! why not". [`HttpFetcher`] is the real implementation. Any failure is a
//! [`FetchError`], and the pipeline treats it as fatal. There are no retries.

use crate::error::FetchError;
use scraper::Html;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Source of a parsed listing document.
pub trait FetchDocument {
    /// Retrieve and parse the page at `source`, exactly as given.
    async fn fetch(&self, source: &Url) -> Result<Html, FetchError>;
}

/// Fetches pages over HTTP(S) with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl FetchDocument for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%source))]
    async fn fetch(&self, source: &Url) -> Result<Html, FetchError> {
        let response = self.client.get(source.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: source.to_string(),
            });
        }

        let body = response.text().await?;
        info!(bytes = body.len(), %status, "Fetched listing page");
        Ok(Html::parse_document(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_parses_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><span class=\"titleline\">x</span></body></html>"),
            )
            .mount(&server)
            .await;

        let origin = Url::parse(&format!("{}/", server.uri())).unwrap();
        let doc = fetcher().fetch(&origin).await.unwrap();

        let selector = scraper::Selector::parse("span.titleline").unwrap();
        assert_eq!(doc.select(&selector).count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_requests_path_and_query_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .and(query_param("p", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let source = Url::parse(&format!("{}/news?p=2", server.uri())).unwrap();
        assert!(fetcher().fetch(&source).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let origin = Url::parse(&format!("{}/", server.uri())).unwrap();
        let err = fetcher().fetch(&origin).await.unwrap_err();

        match err {
            FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_transport_failure() {
        // Nothing listens on the discard port.
        let origin = Url::parse("http://127.0.0.1:9/").unwrap();
        let err = fetcher().fetch(&origin).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
