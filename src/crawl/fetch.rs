// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages for the crawler.
//
// Key functionality:
// - One reqwest Client per crawl (connection pooling, shared timeout)
// - HTTP GET of a page, accepting only 2xx responses with an HTML body
// - Categorizes every failure so it can be logged, then skipped
//
// A failed fetch never stops the crawl. The caller logs the error and
// moves on to the next URL in its work-list.
// =============================================================================

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

// Why a single page could not be crawled for links
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, TLS error, ...
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status code
    #[error("non-success HTTP status {0}")]
    Status(u16),

    /// The body is not an HTML document (images, PDFs, feeds, ...)
    #[error("not an HTML page (content-type: {0:?})")]
    NotHtml(String),

    /// The connection dropped while reading the body
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
}

// Thin wrapper around a reqwest Client configured for crawling
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    // Fetches a page and returns its HTML body
    //
    // Fails with:
    //   Transport - the request could not be sent or timed out
    //   Status    - the response was not 2xx
    //   NotHtml   - Content-Type does not contain "text/html"
    //   Body      - the body could not be read
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // A missing header counts as "not HTML"
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_html(&content_type) {
            return Err(FetchError::NotHtml(content_type));
        }

        log::debug!("{} answered {} ({})", url, status.as_u16(), content_type);

        response.text().await.map_err(FetchError::Body)
    }
}

fn is_html(content_type: &str) -> bool {
    content_type.contains("text/html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> Fetcher {
        Fetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_is_html() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(!is_html("application/pdf"));
        assert!(!is_html(""));
    }

    #[tokio::test]
    async fn test_fetch_html_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<p>hello</p>", "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let body = fetcher().fetch_html(&server.uri()).await.unwrap();
        assert_eq!(body, "<p>hello</p>");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetcher().fetch_html(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_non_html_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"),
            )
            .mount(&server)
            .await;

        let err = fetcher().fetch_html(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::NotHtml(ref ct) if ct == "application/pdf"));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Grab a free port, then close it so the connection is refused
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = fetcher()
            .fetch_html(&format!("http://127.0.0.1:{}/", port))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
