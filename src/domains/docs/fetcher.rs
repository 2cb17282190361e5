//! Documentation page fetching.
//!
//! [`DocFetcher::try_fetch`] reports why a page could not be used;
//! [`DocSource::fetch`] collapses every failure into an empty string so the
//! resolver only ever sees "content" or "no content".

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::extract::extract_main_text;
use crate::core::config::DocsConfig;

/// Reasons a documentation page yielded no usable text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request did not complete within its timeout.
    #[error("Timed out after {timeout:?} fetching {url}")]
    Timeout { url: String, timeout: Duration },

    /// Connection, TLS, redirect or URL error.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body could not be read.
    #[error("Failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page has no recognisable content region.
    #[error("No content region found at {0}")]
    NoContent(String),
}

impl FetchError {
    fn from_reqwest(url: &str, timeout: Duration, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else {
            Self::Request {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// A source of documentation text.
///
/// Implementations must be total: any failure is reported as an empty string.
#[async_trait]
pub trait DocSource: Send + Sync {
    /// Fetch `url` and return its main-content text, or `""` on failure.
    async fn fetch(&self, url: &str, timeout: Duration) -> String;
}

/// HTTP-backed documentation fetcher.
#[derive(Debug, Clone)]
pub struct DocFetcher {
    client: Client,
}

impl DocFetcher {
    /// Build a fetcher whose client follows up to `max_redirects` redirects.
    pub fn new(config: &DocsConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Fetch a page and extract its main content.
    #[instrument(skip(self), level = "debug")]
    pub async fn try_fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, timeout, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|source| {
            if source.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout,
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source,
                }
            }
        })?;

        extract_main_text(&html).ok_or_else(|| FetchError::NoContent(url.to_string()))
    }
}

#[async_trait]
impl DocSource for DocFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> String {
        match self.try_fetch(url, timeout).await {
            Ok(text) => {
                debug!("Fetched {} chars from {}", text.chars().count(), url);
                text
            }
            Err(e) => {
                warn!("Failed to fetch from {}: {}", url, e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn fetcher() -> DocFetcher {
        DocFetcher::new(&DocsConfig::default()).expect("client builds")
    }

    /// Serve a fixed HTTP response on loopback for every connection and
    /// return the base URL.
    async fn serve(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_non_success_status_is_status_error() {
        let url = serve("404 Not Found", "<main>gone</main>").await;
        let fetcher = fetcher();

        let result = fetcher.try_fetch(&url, Duration::from_secs(5)).await;
        assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));

        assert_eq!(fetcher.fetch(&url, Duration::from_secs(5)).await, "");
    }

    #[tokio::test]
    async fn test_page_without_content_region_is_no_content() {
        let url = serve("200 OK", "<html><body><nav>Home | Docs</nav></body></html>").await;
        let fetcher = fetcher();

        let result = fetcher.try_fetch(&url, Duration::from_secs(5)).await;
        assert!(matches!(result, Err(FetchError::NoContent(ref u)) if *u == url));

        assert_eq!(fetcher.fetch(&url, Duration::from_secs(5)).await, "");
    }

    #[tokio::test]
    async fn test_success_page_yields_main_text() {
        let url = serve("200 OK", "<html><body><nav>menu</nav><main><p>Proof verified</p></main></body></html>").await;

        let text = fetcher().fetch(&url, Duration::from_secs(5)).await;
        assert_eq!(text, "Proof verified");
    }

    #[tokio::test]
    async fn test_invalid_url_is_request_error() {
        let result = fetcher()
            .try_fetch("not a url", Duration::from_secs(1))
            .await;
        assert!(matches!(result, Err(FetchError::Request { .. })));
    }

    #[tokio::test]
    async fn test_fetch_is_total_for_invalid_url() {
        let text = fetcher().fetch("::::", Duration::from_secs(1)).await;
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_is_total_for_unreachable_host() {
        // Port 9 (discard) on loopback is closed on any sane test host.
        let text = fetcher()
            .fetch("http://127.0.0.1:9/", Duration::from_secs(2))
            .await;
        assert!(text.is_empty());
    }

    #[test]
    fn test_error_messages_name_the_url() {
        let err = FetchError::Status {
            url: "https://docs.zkverify.io/missing".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 from https://docs.zkverify.io/missing");

        let err = FetchError::NoContent("https://docs.zkverify.io/".to_string());
        assert!(err.to_string().contains("docs.zkverify.io"));
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_fetch_live_docs_home() {
        let text = fetcher()
            .fetch("https://docs.zkverify.io/", Duration::from_secs(15))
            .await;
        assert!(text.to_lowercase().contains("zkverify"));
    }
}
