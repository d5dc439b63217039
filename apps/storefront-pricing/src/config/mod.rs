//! Configuration for the storefront pricing tool.
//!
//! Loads a YAML file with environment variable interpolation, applies
//! defaults for every omitted section and validates the result. The tax
//! rate is a fixed constant of the pricing domain and is not configurable.
//!
//! # Usage
//!
//! ```rust,ignore
//! use storefront_pricing::config::load_config;
//!
//! // Load from default path (storefront-pricing.yaml), falling back to defaults
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("ci/pricing.yaml"))?;
//! ```

mod observability;
mod output;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use output::OutputConfig;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "storefront-pricing.yaml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_PRICING_CONFIG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["json", "pretty"];
const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Report output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// With `None`, reads [`DEFAULT_CONFIG_PATH`] if it exists and otherwise
/// returns the defaults. An explicit path that cannot be read is an error.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH,
        None => {
            tracing::debug!("No config file found, using defaults");
            let config = Config::default();
            validate_config(&config)?;
            return Ok(config);
        }
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let mut config: Config = serde_yaml_bw::from_str(&interpolated)?;
    normalize_config(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Lower-case the enumerated settings so `WARN`, `Pretty` and `JSON` are accepted.
fn normalize_config(config: &mut Config) {
    let logging = &mut config.observability.logging;
    logging.level = logging.level.to_lowercase();
    logging.format = logging.format.to_lowercase();
    config.output.format = config.output.format.to_lowercase();
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let logging = &config.observability.logging;

    if !LOG_LEVELS.contains(&logging.level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {LOG_LEVELS:?}"
        )));
    }

    if !LOG_FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    if !OUTPUT_FORMATS.contains(&config.output.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "output.format must be one of: {OUTPUT_FORMATS:?}"
        )));
    }

    Ok(())
}
