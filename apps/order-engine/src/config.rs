//! Configuration loading, validation, and environment variable
//! interpolation for the order engine.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_engine::config::{EngineConfig, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Access configuration values
//! println!("poll interval: {}s", config.orders.poll_interval_secs);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::RedirectTargets;

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
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Order feed configuration.
    #[serde(default)]
    pub orders: OrdersConfig,
    /// Payment configuration.
    #[serde(default)]
    pub payment: PaymentConfig,
    /// Cart store configuration.
    #[serde(default)]
    pub cart_store: CartStoreConfig,
}

/// Order feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersConfig {
    /// Maximum number of orders fetched per list refresh.
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
    /// Fallback poll interval in seconds for the order feed.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            list_limit: default_list_limit(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// Payment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Use the demo payment adapter instead of a real provider.
    #[serde(default = "default_demo")]
    pub demo: bool,
    /// Base URL for demo checkout links.
    #[serde(default = "default_payment_base_url")]
    pub base_url: String,
    /// Post-checkout redirect URLs.
    #[serde(default)]
    pub redirect: RedirectTargets,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            demo: default_demo(),
            base_url: default_payment_base_url(),
            redirect: RedirectTargets::default(),
        }
    }
}

/// Cart store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartStoreConfig {
    /// Directory the file-backed cart store writes to.
    #[serde(default = "default_cart_dir")]
    pub dir: String,
}

impl Default for CartStoreConfig {
    fn default() -> Self {
        Self {
            dir: default_cart_dir(),
        }
    }
}

fn default_list_limit() -> usize {
    100
}

fn default_poll_interval_secs() -> u64 {
    15
}

fn default_demo() -> bool {
    true
}

fn default_payment_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_cart_dir() -> String {
    ".cart-cache".to_string()
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let path = path.unwrap_or("config.yaml");

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
pub fn load_config_from_string(yaml: &str) -> Result<EngineConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: EngineConfig = serde_yaml_bw::from_str(&interpolated)?;
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

    let mut result = input.to_string();

    // Match ${VAR} or ${VAR:-default} patterns
    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(var_match) = cap.get(1) else {
            continue;
        };
        let full_match = full_match.as_str();
        let var_name = var_match.as_str();
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        };

        result = result.replace(full_match, &value);
    }

    result
}

/// Validate configuration values.
fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
    if config.orders.list_limit == 0 {
        return Err(ConfigError::ValidationError(
            "orders.list_limit must be positive".to_string(),
        ));
    }

    if config.orders.poll_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "orders.poll_interval_secs must be positive".to_string(),
        ));
    }

    if config.cart_store.dir.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "cart_store.dir must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.orders.list_limit, 100);
        assert_eq!(config.orders.poll_interval_secs, 15);
        assert!(config.payment.demo);
        assert_eq!(config.cart_store.dir, ".cart-cache");
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
orders:
  list_limit: 50
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert_eq!(config.orders.list_limit, 50);
        assert_eq!(config.orders.poll_interval_secs, 15); // Default value
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.orders.list_limit, 100);
        assert!(config.payment.demo);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        // Use a variable name unlikely to exist
        let input = "dir: ${ORDER_ENGINE_TEST_NONEXISTENT_VAR:-.cart-cache}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "dir: .cart-cache");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "base_url: ${ORDER_ENGINE_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "base_url: ");
    }

    #[test]
    fn test_validation_zero_list_limit() {
        let yaml = r"
orders:
  list_limit: 0
";

        let result = load_config_from_string(yaml);
        let Err(err) = result else {
            panic!("expected error for zero list_limit");
        };
        assert!(err.to_string().contains("list_limit"));
    }

    #[test]
    fn test_validation_zero_poll_interval() {
        let yaml = r"
orders:
  poll_interval_secs: 0
";

        let result = load_config_from_string(yaml);
        let Err(err) = result else {
            panic!("expected error for zero poll interval");
        };
        assert!(err.to_string().contains("poll_interval_secs"));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
orders:
  list_limit: 200
  poll_interval_secs: 30

payment:
  demo: false
  base_url: "https://pay.example.com"
  redirect:
    success: "/done"
    failure: "/oops"
    pending: "/wait"

cart_store:
  dir: "/var/cache/carts"
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.orders.list_limit, 200);
        assert_eq!(config.orders.poll_interval_secs, 30);
        assert!(!config.payment.demo);
        assert_eq!(config.payment.base_url, "https://pay.example.com");
        assert_eq!(config.payment.redirect.success, "/done");
        assert_eq!(config.cart_store.dir, "/var/cache/carts");
    }
}
