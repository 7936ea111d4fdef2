use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Environment overrides are applied after parsing and before validation,
/// so a deployment can ship one TOML file and tune individual knobs per
/// process.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use pagelens::config::load_config;
///
/// let config = load_config(Path::new("pagelens.toml")).unwrap();
/// println!("Timeout: {}s", config.request.timeout_seconds);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let mut config: Config = toml::from_str(&content)?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

/// Builds a configuration from defaults plus environment overrides
///
/// Used when no config file is supplied; every value starts at its
/// documented default.
pub fn config_from_env() -> Result<Config, ConfigError> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

/// Applies the documented environment variable overrides to a configuration
///
/// Recognized variables: `REQUEST_TIMEOUT` (seconds), `MAX_RETRIES`,
/// `RATE_LIMIT_DELAY` (seconds, fractional allowed), `MAX_CONTENT_LENGTH`
/// (bytes). Unset variables leave the existing value untouched; set but
/// unparseable values are an error rather than a silent fallback.
pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
    if let Some(v) = env_value("REQUEST_TIMEOUT") {
        config.request.timeout_seconds = parse_env("REQUEST_TIMEOUT", &v)?;
    }
    if let Some(v) = env_value("MAX_RETRIES") {
        config.request.max_retries = parse_env("MAX_RETRIES", &v)?;
    }
    if let Some(v) = env_value("RATE_LIMIT_DELAY") {
        config.request.rate_limit_delay = parse_env("RATE_LIMIT_DELAY", &v)?;
    }
    if let Some(v) = env_value("MAX_CONTENT_LENGTH") {
        config.limits.max_content_length = parse_env("MAX_CONTENT_LENGTH", &v)?;
    }
    Ok(())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnv {
        name: name.to_string(),
        value: value.to_string(),
    })
}
