//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional.
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level / filter directives (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DATASET_PATH` - JSON dataset replacing the embedded World Cup finals
//! - `BEHIND_PROXY` - Read client IP from forwarding headers for rate limiting
//! - `RATE_LIMIT_PER_SECOND` - Sustained requests per second per client
//!   (default: 10, `0` disables rate limiting)
//! - `RATE_LIMIT_BURST` - Burst size per client (default: 50)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export DATASET_PATH="./data/world_cup_finals.json"
//! export LOG_FORMAT="json"
//! ```

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// `None` serves the dataset embedded in the binary.
    pub dataset_path: Option<String>,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Zero disables rate limiting.
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

/// Effective rate limiter settings, present only when limiting is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u64,
    pub burst: u32,
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dataset_path = env::var("DATASET_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            dataset_path,
            behind_proxy,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - rate limiting is enabled with a zero burst or more than 10000 requests/s
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_per_second > 10_000 {
            anyhow::bail!(
                "RATE_LIMIT_PER_SECOND is too large (max: 10000), got {}",
                self.rate_limit_per_second
            );
        }

        if self.rate_limit_per_second > 0 && self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1 when rate limiting is enabled");
        }

        Ok(())
    }

    /// Rate limiter settings, or `None` when disabled.
    pub fn rate_limit(&self) -> Option<RateLimitConfig> {
        (self.rate_limit_per_second > 0).then_some(RateLimitConfig {
            requests_per_second: self.rate_limit_per_second,
            burst: self.rate_limit_burst,
            behind_proxy: self.behind_proxy,
        })
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match &self.dataset_path {
            Some(path) => tracing::info!("  Dataset: {}", path),
            None => tracing::info!("  Dataset: embedded"),
        }
        match self.rate_limit() {
            Some(limit) => tracing::info!(
                "  Rate limit: {}/s, burst {}{}",
                limit.requests_per_second,
                limit.burst,
                if limit.behind_proxy { " (behind proxy)" } else { "" }
            ),
            None => tracing::info!("  Rate limit: disabled"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
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
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "DATASET_PATH",
        "BEHIND_PROXY",
        "RATE_LIMIT_PER_SECOND",
        "RATE_LIMIT_BURST",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            dataset_path: None,
            behind_proxy: false,
            rate_limit_per_second: 10,
            rate_limit_burst: 50,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:3000".to_string();
        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());

        config.rate_limit_per_second = 0;
        assert!(config.validate().is_ok());

        config.rate_limit_per_second = 20_000;
        config.rate_limit_burst = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rate_limit_disabled_at_zero() {
        let mut config = base_config();
        assert_eq!(
            config.rate_limit(),
            Some(RateLimitConfig {
                requests_per_second: 10,
                burst: 50,
                behind_proxy: false,
            })
        );

        config.rate_limit_per_second = 0;
        assert_eq!(config.rate_limit(), None);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert!(config.dataset_path.is_none());
        assert!(!config.behind_proxy);
        assert_eq!(config.rate_limit_per_second, 10);
        assert_eq!(config.rate_limit_burst, 50);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("DATASET_PATH", "/srv/finals.json");
            env::set_var("BEHIND_PROXY", "TRUE");
            env::set_var("RATE_LIMIT_PER_SECOND", "0");
            env::set_var("RATE_LIMIT_BURST", "not-a-number");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.dataset_path.as_deref(), Some("/srv/finals.json"));
        assert!(config.behind_proxy);
        assert!(config.rate_limit().is_none());
        assert_eq!(config.rate_limit_burst, 50);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_dataset_path_means_embedded() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATASET_PATH", "   ");
        }

        let config = Config::from_env().unwrap();
        assert!(config.dataset_path.is_none());

        clear_env();
    }
}
