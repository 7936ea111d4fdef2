//! Bounded HTTP fetching
//!
//! This module owns all network access for the engine:
//! - Building the shared HTTP client with the configured user agent
//! - Issuing exactly one GET per call, under the configured timeout
//! - Enforcing the maximum content length after the response arrives
//! - Classifying failures into the engine's error taxonomy
//!
//! There is no retry loop here. The configured retry count is policy for
//! callers that wrap the engine; a failed fetch is terminal for the call.

use crate::config::Config;
use crate::url::NormalizedUrl;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Raw result of a successful fetch
#[derive(Debug)]
pub struct FetchedPage {
    /// Response body bytes, guaranteed within the configured size limit
    pub body: Vec<u8>,
    /// Final HTTP status code
    pub status: u16,
    /// Final URL after any redirects the client followed
    pub final_url: String,
}

impl FetchedPage {
    /// Decodes the body as UTF-8, replacing invalid sequences
    ///
    /// Real pages occasionally declare one encoding and serve another;
    /// lossy decoding keeps extraction best-effort instead of failing the
    /// whole call on a stray byte.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Builds the shared HTTP client from configuration
///
/// The client is constructed once per engine and reused across calls; it
/// holds only the fixed user-agent and timeout, no per-request state.
///
/// # Arguments
///
/// * `config` - Engine configuration supplying user-agent and timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.client.user_agent.clone())
        .timeout(Duration::from_secs(config.request.timeout_seconds))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page with bounded resource use
///
/// # Request Flow
///
/// 1. Send one GET request with the client's fixed user-agent
/// 2. Fail on non-success status codes
/// 3. Reject bodies whose declared Content-Length exceeds the limit
/// 4. Read the body and reject it if the actual size exceeds the limit
///
/// A body exactly at the limit passes; one byte over fails.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The normalized URL to fetch
/// * `config` - Configuration supplying timeout (for error text) and size limit
///
/// # Returns
///
/// * `Ok(FetchedPage)` - Body bytes within the limit plus final status/URL
/// * `Err(ScrapeError)` - `Timeout`, `Request`, or `ContentTooLarge`
pub async fn fetch_page(
    client: &Client,
    url: &NormalizedUrl,
    config: &Config,
) -> Result<FetchedPage, ScrapeError> {
    let max = config.limits.max_content_length;

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| classify_request_error(e, config))?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return Err(ScrapeError::Request(format!(
            "HTTP status {} for {}",
            status, final_url
        )));
    }

    // Declared size first, so oversized bodies are rejected without
    // buffering them in full
    if let Some(declared) = response.content_length() {
        let declared = declared as usize;
        if declared > max {
            return Err(ScrapeError::ContentTooLarge {
                size: declared,
                max,
            });
        }
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| classify_request_error(e, config))?;

    if body.len() > max {
        return Err(ScrapeError::ContentTooLarge {
            size: body.len(),
            max,
        });
    }

    Ok(FetchedPage {
        body: body.to_vec(),
        status: status.as_u16(),
        final_url,
    })
}

/// Maps a reqwest error onto the engine's error taxonomy
fn classify_request_error(error: reqwest::Error, config: &Config) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            seconds: config.request.timeout_seconds,
        }
    } else {
        ScrapeError::Request(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        let config = Config::default();
        let client = build_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_client_with_custom_agent() {
        let mut config = Config::default();
        config.client.user_agent = "PageLens-Test/1.0".to_string();
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn test_body_text_lossy_decoding() {
        let page = FetchedPage {
            body: vec![b'h', b'i', 0xFF, b'!'],
            status: 200,
            final_url: "https://example.com/".to_string(),
        };
        let text = page.body_text();
        assert!(text.starts_with("hi"));
        assert!(text.ends_with('!'));
    }

    // Network-level behavior (timeouts, status codes, size limits) is
    // exercised end-to-end with wiremock in tests/engine_tests.rs
}
