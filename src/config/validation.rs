use crate::config::types::{ClientConfig, Config, LimitsConfig, RequestConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_request_config(&config.request)?;
    validate_limits_config(&config.limits)?;
    validate_client_config(&config.client)?;
    Ok(())
}

/// Validates request configuration
fn validate_request_config(config: &RequestConfig) -> Result<(), ConfigError> {
    if config.timeout_seconds < 1 || config.timeout_seconds > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-seconds must be between 1 and 300, got {}",
            config.timeout_seconds
        )));
    }

    if config.rate_limit_delay < 0.0 {
        return Err(ConfigError::Validation(format!(
            "rate-limit-delay must be >= 0, got {}",
            config.rate_limit_delay
        )));
    }

    // max_retries is policy-only; any u32 value is acceptable

    Ok(())
}

/// Validates content limits
fn validate_limits_config(config: &LimitsConfig) -> Result<(), ConfigError> {
    if config.max_content_length < 1 {
        return Err(ConfigError::Validation(
            "max-content-length must be >= 1 byte".to_string(),
        ));
    }

    Ok(())
}

/// Validates client identification
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
