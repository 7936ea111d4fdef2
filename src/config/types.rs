use serde::Deserialize;

/// Default identifying user-agent sent with every fetch
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for PageLens
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Request behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    /// Seconds to wait for a response before the fetch fails
    #[serde(rename = "timeout-seconds", default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Retry policy carried for callers that wrap the engine; the engine
    /// itself never retries a failed fetch
    #[serde(rename = "max-retries", default = "default_retries")]
    pub max_retries: u32,

    /// Minimum delay between calls, in seconds; applied by the caller,
    /// not by the engine
    #[serde(rename = "rate-limit-delay", default = "default_rate_limit")]
    pub rate_limit_delay: f64,
}

/// Content limits configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum response body size in bytes; bodies above this fail the call
    #[serde(rename = "max-content-length", default = "default_max_content")]
    pub max_content_length: usize,
}

/// HTTP client identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// User-agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    10
}

fn default_retries() -> u32 {
    3
}

fn default_rate_limit() -> f64 {
    1.0
}

fn default_max_content() -> usize {
    1_000_000
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_retries(),
            rate_limit_delay: default_rate_limit(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_content_length: default_max_content(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request: RequestConfig::default(),
            limits: LimitsConfig::default(),
            client: ClientConfig::default(),
        }
    }
}
