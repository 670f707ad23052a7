//! Configuration management for the check harness
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/bbc-e2e/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::core::error::{E2eError, Result};

/// Main configuration for the harness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target site URLs
    pub site: SiteConfig,
    /// Browser launch configuration
    pub browser: BrowserConfig,
    /// Wait and settle tuning
    #[serde(default)]
    pub wait: WaitConfig,
}

/// Target site configuration
///
/// Both URLs point at the live site by default. Overriding them is mainly
/// useful for pointing the suites at a recorded snapshot server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Homepage the news suite starts from
    pub home_url: String,
    /// Article page carrying the feedback form
    pub feedback_url: String,
}

/// Browser launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run in headed mode (visible browser)
    pub headed: bool,
    /// Explicit Chrome/Chromium executable path (auto-detect when unset)
    pub chrome_path: Option<String>,
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
}

/// Wait and settle tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Bound for a navigation to settle, in seconds
    pub navigation_timeout_secs: u64,
    /// Quiet window for the network-idle criterion, in ms
    pub idle_window_ms: u64,
    /// In-flight connection ceiling for the network-idle criterion
    pub max_inflight: usize,
    /// Window to watch for validation errors after a form submit, in ms
    pub form_settle_ms: u64,
    /// Poll interval while watching for validation errors, in ms
    pub poll_interval_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_url: env::var("BBC_E2E_HOME_URL")
                .unwrap_or_else(|_| "https://www.bbc.com/".to_string()),
            feedback_url: env::var("BBC_E2E_FEEDBACK_URL")
                .unwrap_or_else(|_| "https://www.bbc.com/news/52143212".to_string()),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headed: env::var("BBC_E2E_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            chrome_path: env::var("BBC_E2E_CHROME").ok(),
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            navigation_timeout_secs: 100,
            idle_window_ms: 500,
            max_inflight: 2,
            form_settle_ms: 1000,
            poll_interval_ms: 100,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            browser: BrowserConfig::default(),
            wait: WaitConfig::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bbc-e2e")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(E2eError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| E2eError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| E2eError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| E2eError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| E2eError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| E2eError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Reject configs whose URLs would not survive `page.goto`
    pub fn validate(&self) -> Result<()> {
        for raw in [&self.site.home_url, &self.site.feedback_url] {
            Url::parse(raw)
                .map_err(|e| E2eError::config(format!("Invalid URL '{}': {}", raw, e)))?;
        }
        if self.wait.idle_window_ms == 0 {
            return Err(E2eError::config("idle_window_ms must be non-zero"));
        }
        Ok(())
    }

    /// Navigation settle bound
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.wait.navigation_timeout_secs)
    }

    /// Quiet window for network idle
    pub fn idle_window(&self) -> Duration {
        Duration::from_millis(self.wait.idle_window_ms)
    }

    /// Window to watch for validation errors after submit
    pub fn form_settle(&self) -> Duration {
        Duration::from_millis(self.wait.form_settle_ms)
    }

    /// Poll interval for the error watch
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.wait.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.wait.navigation_timeout_secs, 100);
        assert_eq!(config.wait.idle_window_ms, 500);
        assert_eq!(config.wait.max_inflight, 2);
        assert!(config.site.home_url.starts_with("https://www.bbc.com"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("home_url"));
        assert!(toml_str.contains("navigation_timeout_secs"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.wait.max_inflight, config.wait.max_inflight);
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::default();
        config.site.home_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("bbc-e2e"));
    }

    #[test]
    fn test_duration_helpers() {
        let config = Config::default();
        assert_eq!(config.navigation_timeout(), Duration::from_secs(100));
        assert_eq!(config.idle_window(), Duration::from_millis(500));
        assert_eq!(config.form_settle(), Duration::from_millis(1000));
    }
}
