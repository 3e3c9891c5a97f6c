//! Blog search configuration loading from config.toml
//!
//! The `[blog]` table controls where articles are fetched from, how often the
//! in-memory snapshot is refreshed and the accent colour used for embeds.
//! Every key is optional; a missing file yields the defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{path::Path, time::Duration};

/// Go blog index page
pub const DEFAULT_INDEX_URL: &str = "https://go.dev/blog/all";

/// Longest accepted refresh period, one year
pub const MAX_REFRESH_INTERVAL_HOURS: u64 = 24 * 365;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Blog search settings
    #[serde(default)]
    pub blog: BlogConfig,
}

/// Settings for the `/blog` feature
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Page listing every article
    pub index_url: String,
    /// Hours between two refreshes of the article snapshot
    pub refresh_interval_hours: u64,
    /// Embed colour
    pub accent_color: u32,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            refresh_interval_hours: 72,
            accent_color: 0x00AD_D8,
        }
    }
}

impl BlogConfig {
    /// Refresh period as a [`Duration`]
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_hours.saturating_mul(60 * 60))
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - `refresh_interval_hours` is zero or above [`MAX_REFRESH_INTERVAL_HOURS`]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if config.blog.refresh_interval_hours == 0 {
        return Err(Error::Config {
            message: "refresh_interval_hours must be greater than zero".to_string(),
        });
    }
    if config.blog.refresh_interval_hours > MAX_REFRESH_INTERVAL_HOURS {
        return Err(Error::Config {
            message: format!(
                "refresh_interval_hours must be at most {MAX_REFRESH_INTERVAL_HOURS}, got {}",
                config.blog.refresh_interval_hours
            ),
        });
    }

    Ok(config)
}

/// Loads configuration from `CONFIG_PATH`, or ./config.toml when unset.
///
/// A missing file is not an error: the defaults are used instead.
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        tracing::info!("No configuration file at {path}, using defaults");
        return Ok(Config::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_blog_config() {
        let toml_str = r#"
            [blog]
            index_url = "https://example.com/blog/all"
            refresh_interval_hours = 12
            accent_color = 0xFF0000
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.blog.index_url, "https://example.com/blog/all");
        assert_eq!(config.blog.refresh_interval_hours, 12);
        assert_eq!(config.blog.accent_color, 0xFF0000);
        assert_eq!(config.blog.refresh_interval(), Duration::from_secs(12 * 3600));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = parse_config("[blog]\nrefresh_interval_hours = 24\n").unwrap();
        assert_eq!(config.blog.index_url, DEFAULT_INDEX_URL);
        assert_eq!(config.blog.refresh_interval_hours, 24);

        let empty = parse_config("").unwrap();
        assert_eq!(empty.blog.refresh_interval_hours, 72);
        assert_eq!(empty.blog.accent_color, 0x00AD_D8);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = parse_config("[blog]\nrefresh_interval_hours = 0\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_oversized_interval_rejected() {
        for hours in [MAX_REFRESH_INTERVAL_HOURS + 1, 9_223_372_036_854_775_807] {
            let result = parse_config(&format!("[blog]\nrefresh_interval_hours = {hours}\n"));
            assert!(matches!(result, Err(Error::Config { .. })), "{hours} accepted");
        }

        let config =
            parse_config(&format!("[blog]\nrefresh_interval_hours = {MAX_REFRESH_INTERVAL_HOURS}\n"))
                .unwrap();
        assert_eq!(
            config.blog.refresh_interval(),
            Duration::from_secs(MAX_REFRESH_INTERVAL_HOURS * 3600)
        );
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result = parse_config("[blog\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
