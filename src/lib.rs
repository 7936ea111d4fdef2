//! PageLens: a single-page extraction engine
//!
//! This crate fetches exactly one webpage per call and converts it into one of
//! two structured artifacts: a classified list of hyperlinks, or cleaned text
//! with metadata (title, meta description, heading hierarchy). Every operation
//! returns a uniform success/failure envelope carrying processing time and a
//! UTC timestamp, so callers branch only on `success` and never on payload
//! shape.
//!
//! PageLens does not crawl, cache, or render JavaScript. Each call is
//! independent; the only cross-call state is the read-only HTTP client held
//! by [`Engine`].

pub mod config;
pub mod engine;
pub mod envelope;
pub mod extract;
pub mod fetch;
pub mod url;

use thiserror::Error;

/// Main error type for PageLens extraction operations
///
/// Every variant is caught at the engine boundary and converted into a
/// failure envelope; none of these propagate past the two public operations.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("{0}")]
    Validation(String),

    #[error("Request timeout after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Content too large: {size} bytes (max: {max})")]
    ContentTooLarge { size: usize, max: usize },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid environment override for {name}: '{value}'")]
    InvalidEnv { name: String, value: String },
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use engine::Engine;
pub use envelope::{LinksEnvelope, SummaryEnvelope, TextEnvelope};
pub use extract::{Link, LinkType, TextExtraction};
pub use crate::url::NormalizedUrl;
