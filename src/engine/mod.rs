//! The extraction engine: composition of the core capabilities
//!
//! [`Engine`] owns the configuration and the shared HTTP client, both
//! immutable after construction. Each operation runs the same pipeline:
//! normalize the URL, fetch the page, parse it, run one extractor, and
//! wrap the result in an envelope. Every failure, including unexpected
//! ones, is converted into a failure envelope at this boundary; nothing
//! propagates to the caller.

use crate::config::Config;
use crate::envelope::{LinksEnvelope, SummaryEnvelope, TextEnvelope};
use crate::extract::{
    self, external_links, filter_links_by_type, parse_document, Link, LinkType, NoiseRules,
    TextExtraction,
};
use crate::fetch::{build_client, fetch_page};
use crate::url::normalize_url;
use crate::{Result, ScrapeError};
use reqwest::Client;
use std::time::Instant;

/// Single-page extraction engine
///
/// Holds no mutable cross-call state. The client is built once with the
/// configured user-agent and timeout and reused for every fetch, so the
/// engine can be shared across tasks by reference.
pub struct Engine {
    config: Config,
    client: Client,
    noise_rules: NoiseRules,
}

impl Engine {
    /// Builds an engine from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Engine configuration (timeout, size limit, user-agent)
    ///
    /// # Returns
    ///
    /// * `Ok(Engine)` - Ready to serve extraction calls
    /// * `Err(ScrapeError)` - The HTTP client could not be constructed
    pub fn new(config: Config) -> Result<Self> {
        let client = build_client(&config)
            .map_err(|e| ScrapeError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            noise_rules: NoiseRules::default(),
        })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extracts and classifies every hyperlink on a page
    ///
    /// # Arguments
    ///
    /// * `url` - Raw page URL; a missing scheme is auto-corrected
    ///
    /// # Returns
    ///
    /// A [`LinksEnvelope`], failure-shaped when any step fails
    pub async fn extract_links(&self, url: &str) -> LinksEnvelope {
        let started = Instant::now();

        match self.links_for(url).await {
            Ok(links) => {
                tracing::info!(
                    url,
                    count = links.len(),
                    elapsed = ?started.elapsed(),
                    "extracted links"
                );
                LinksEnvelope::success(links, started)
            }
            Err(e) => {
                tracing::error!(url, error = %e, "link extraction failed");
                LinksEnvelope::failure(e, started)
            }
        }
    }

    /// Extracts links of a single type (email, file, web, ...)
    ///
    /// Runs the full extraction and filters afterward, so ids still
    /// reflect positions in the complete document.
    pub async fn extract_links_by_type(&self, url: &str, link_type: LinkType) -> LinksEnvelope {
        let started = Instant::now();

        match self.links_for(url).await {
            Ok(links) => {
                let filtered = filter_links_by_type(links, link_type);
                tracing::info!(url, %link_type, count = filtered.len(), "extracted typed links");
                LinksEnvelope::success(filtered, started)
            }
            Err(e) => {
                tracing::error!(url, error = %e, "link extraction failed");
                LinksEnvelope::failure(e, started)
            }
        }
    }

    /// Extracts only the links pointing outside the page's host
    pub async fn extract_external_links(&self, url: &str) -> LinksEnvelope {
        let started = Instant::now();

        match self.links_for(url).await {
            Ok(links) => {
                let external = external_links(links);
                tracing::info!(url, count = external.len(), "extracted external links");
                LinksEnvelope::success(external, started)
            }
            Err(e) => {
                tracing::error!(url, error = %e, "link extraction failed");
                LinksEnvelope::failure(e, started)
            }
        }
    }

    /// Extracts cleaned text and page metadata
    ///
    /// # Arguments
    ///
    /// * `url` - Raw page URL; a missing scheme is auto-corrected
    ///
    /// # Returns
    ///
    /// A [`TextEnvelope`], failure-shaped when any step fails
    pub async fn extract_text(&self, url: &str) -> TextEnvelope {
        let started = Instant::now();

        match self.text_for(url).await {
            Ok(extraction) => {
                tracing::info!(
                    url,
                    words = extraction.word_count,
                    elapsed = ?started.elapsed(),
                    "extracted text"
                );
                TextEnvelope::success(extraction, started)
            }
            Err(e) => {
                tracing::error!(url, error = %e, "text extraction failed");
                TextEnvelope::failure(e, started)
            }
        }
    }

    /// Extracts text plus a sentence-bounded summary
    ///
    /// # Arguments
    ///
    /// * `url` - Raw page URL
    /// * `max_sentences` - Maximum sentences in the summary
    pub async fn extract_summary(&self, url: &str, max_sentences: usize) -> SummaryEnvelope {
        let started = Instant::now();

        match self.text_for(url).await {
            Ok(extraction) => {
                let summary = extract::summarize(&extraction.cleaned_text, max_sentences);
                tracing::info!(url, sentences = summary.total_sentences, "extracted summary");
                SummaryEnvelope::success(extraction, summary, started)
            }
            Err(e) => {
                tracing::error!(url, error = %e, "summary extraction failed");
                SummaryEnvelope::failure(e, started)
            }
        }
    }

    /// Shared pipeline head for link operations: normalize, fetch, parse,
    /// extract
    async fn links_for(&self, url: &str) -> Result<Vec<Link>> {
        let normalized = normalize_url(url)?;
        let page = fetch_page(&self.client, &normalized, &self.config).await?;
        let document = parse_document(&page.body_text());
        Ok(extract::extract_links(&document, normalized.as_str()))
    }

    /// Shared pipeline head for text operations
    async fn text_for(&self, url: &str) -> Result<TextExtraction> {
        let normalized = normalize_url(url)?;
        let page = fetch_page(&self.client, &normalized, &self.config).await?;
        let document = parse_document(&page.body_text());
        Ok(extract::extract_text_content(&document, &self.noise_rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_builds_from_default_config() {
        assert!(Engine::new(Config::default()).is_ok());
    }

    #[tokio::test]
    async fn test_empty_url_yields_validation_failure_envelope() {
        let engine = Engine::new(Config::default()).unwrap();

        let envelope = engine.extract_links("   ").await;
        assert!(!envelope.success);
        assert!(envelope.urls.is_empty());
        assert_eq!(envelope.count, 0);
        assert_eq!(envelope.error.as_deref(), Some("URL cannot be empty"));
    }

    #[tokio::test]
    async fn test_empty_url_text_failure_envelope() {
        let engine = Engine::new(Config::default()).unwrap();

        let envelope = engine.extract_text("").await;
        assert!(!envelope.success);
        assert_eq!(envelope.text, "");
        assert_eq!(envelope.word_count, 0);
        assert!(envelope.headings.is_empty());
        assert!(envelope.error.is_some());
    }

    // Network paths are covered end-to-end in tests/engine_tests.rs
}
