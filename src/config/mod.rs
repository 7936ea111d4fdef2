//! Configuration loading and validation
//!
//! Configuration is read from a TOML file, overridden by environment
//! variables, and validated before use. Every knob has a default, so an
//! engine can also be built with no file at all.

mod parser;
mod types;
mod validation;

pub use parser::{apply_env_overrides, config_from_env, load_config};
pub use types::{ClientConfig, Config, LimitsConfig, RequestConfig, DEFAULT_USER_AGENT};
pub use validation::validate;
