//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `DEFAULT_THEME` - `dark` or `light`, used when no theme cookie is sent (default: `dark`)
//! - `INQUIRY_QUEUE_CAPACITY` - Contact inquiry buffer size (default: 1000, min: 10)
//! - `INQUIRY_LOG_PATH` - JSON-lines file receiving delivered inquiries (default: log only)
//! - `INQUIRY_MAX_RETRIES` - Delivery retry attempts (default: 3, max: 10)

use anyhow::Result;
use std::env;
use std::str::FromStr;

use crate::domain::theme::ThemeContext;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    /// Theme applied when the request carries no `theme` cookie.
    pub default_theme: String,
    pub inquiry_queue_capacity: usize,
    /// When set, delivered inquiries are appended to this file as JSON lines.
    pub inquiry_log_path: Option<String>,
    pub inquiry_max_retries: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults; range checks
    /// happen in [`Config::validate`].
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let default_theme = env::var("DEFAULT_THEME").unwrap_or_else(|_| "dark".to_string());

        let inquiry_queue_capacity = env::var("INQUIRY_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1_000);

        let inquiry_log_path = env::var("INQUIRY_LOG_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let inquiry_max_retries = env::var("INQUIRY_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            default_theme,
            inquiry_queue_capacity,
            inquiry_log_path,
            inquiry_max_retries,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `inquiry_queue_capacity` is outside `10..=100000`
    /// - `inquiry_max_retries` is greater than 10
    /// - `log_format` is not `text` or `json`
    /// - `default_theme` is not `dark` or `light`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.inquiry_queue_capacity < 10 {
            anyhow::bail!(
                "INQUIRY_QUEUE_CAPACITY must be at least 10, got {}",
                self.inquiry_queue_capacity
            );
        }

        if self.inquiry_queue_capacity > 100_000 {
            anyhow::bail!(
                "INQUIRY_QUEUE_CAPACITY is too large (max: 100000), got {}",
                self.inquiry_queue_capacity
            );
        }

        if self.inquiry_max_retries > 10 {
            anyhow::bail!(
                "INQUIRY_MAX_RETRIES must be at most 10, got {}",
                self.inquiry_max_retries
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if ThemeContext::from_str(&self.default_theme).is_err() {
            anyhow::bail!(
                "DEFAULT_THEME must be 'dark' or 'light', got '{}'",
                self.default_theme
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Parsed default theme. Falls back to dark for unvalidated configs.
    pub fn default_theme(&self) -> ThemeContext {
        ThemeContext::from_str(&self.default_theme).unwrap_or_default()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Default theme: {}", self.default_theme);

        if let Some(ref path) = self.inquiry_log_path {
            tracing::info!("  Inquiry sink: {} (jsonl)", path);
        } else {
            tracing::info!("  Inquiry sink: log");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Inquiry queue capacity: {}", self.inquiry_queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "static".to_string(),
            default_theme: "dark".to_string(),
            inquiry_queue_capacity: 1_000,
            inquiry_log_path: None,
            inquiry_max_retries: 3,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.inquiry_queue_capacity = 5;
        assert!(config.validate().is_err());
        config.inquiry_queue_capacity = 1_000;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.default_theme = "sepia".to_string();
        assert!(config.validate().is_err());
        config.default_theme = "light".to_string();
        assert!(config.validate().is_ok());

        config.inquiry_max_retries = 11;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_theme_parsing() {
        let mut config = valid_config();
        assert!(config.default_theme().is_dark_mode);

        config.default_theme = "light".to_string();
        assert!(!config.default_theme().is_dark_mode);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("INQUIRY_QUEUE_CAPACITY");
            env::remove_var("INQUIRY_LOG_PATH");
            env::remove_var("DEFAULT_THEME");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.inquiry_queue_capacity, 1_000);
        assert!(config.inquiry_log_path.is_none());
        assert_eq!(config.default_theme, "dark");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("INQUIRY_QUEUE_CAPACITY", "250");
            env::set_var("INQUIRY_LOG_PATH", "/tmp/inquiries.jsonl");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.inquiry_queue_capacity, 250);
        assert_eq!(
            config.inquiry_log_path.as_deref(),
            Some("/tmp/inquiries.jsonl")
        );

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("INQUIRY_QUEUE_CAPACITY");
            env::remove_var("INQUIRY_LOG_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_blank_inquiry_log_path_is_ignored() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("INQUIRY_LOG_PATH", "   ");
        }

        let config = Config::from_env();
        assert!(config.inquiry_log_path.is_none());

        unsafe {
            env::remove_var("INQUIRY_LOG_PATH");
        }
    }
}
