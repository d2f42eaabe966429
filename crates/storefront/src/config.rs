//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GLOBAL_BITES_DATA_DIR` - Directory backing the site's local storage (default: .global-bites)
//! - `GLOBAL_BITES_REDIRECT_DELAY_MS` - Pause between placing an order and the thank-you page (default: 1000)
//! - `GLOBAL_BITES_SITE_ORIGIN` - Public origin used in share links (default: <http://localhost:8080>)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_DATA_DIR: &str = ".global-bites";
const DEFAULT_REDIRECT_DELAY_MS: &str = "1000";
const DEFAULT_SITE_ORIGIN: &str = "http://localhost:8080";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding one file per storage key
    pub data_dir: PathBuf,
    /// Delay before moving from checkout to the thank-you page
    pub redirect_delay: Duration,
    /// Site origin, without a trailing slash
    pub site_origin: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            redirect_delay: Duration::from_secs(1),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_or_default(
            &lookup,
            "GLOBAL_BITES_DATA_DIR",
            DEFAULT_DATA_DIR,
        ));
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "GLOBAL_BITES_DATA_DIR".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let redirect_delay = get_or_default(
            &lookup,
            "GLOBAL_BITES_REDIRECT_DELAY_MS",
            DEFAULT_REDIRECT_DELAY_MS,
        )
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| {
            ConfigError::InvalidEnvVar("GLOBAL_BITES_REDIRECT_DELAY_MS".to_string(), e.to_string())
        })?;

        let site_origin = parse_origin(&get_or_default(
            &lookup,
            "GLOBAL_BITES_SITE_ORIGIN",
            DEFAULT_SITE_ORIGIN,
        ))?;

        Ok(Self {
            data_dir,
            redirect_delay,
            site_origin,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Validate an http(s) origin and strip any trailing slash.
fn parse_origin(value: &str) -> Result<String, ConfigError> {
    let invalid =
        |reason: String| ConfigError::InvalidEnvVar("GLOBAL_BITES_SITE_ORIGIN".to_string(), reason);

    let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url.origin().ascii_serialization())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("GLOBAL_BITES_DATA_DIR", "/var/lib/global-bites"),
            ("GLOBAL_BITES_REDIRECT_DELAY_MS", "0"),
            ("GLOBAL_BITES_SITE_ORIGIN", "https://globalbites.example/menu/"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/global-bites"));
        assert_eq!(config.redirect_delay, Duration::ZERO);
        assert_eq!(config.site_origin, "https://globalbites.example");
    }

    #[test]
    fn test_invalid_delay() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[(
            "GLOBAL_BITES_REDIRECT_DELAY_MS",
            "soon",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "GLOBAL_BITES_REDIRECT_DELAY_MS"));
    }

    #[test]
    fn test_invalid_origin() {
        for origin in ["not a url", "ftp://globalbites.example", "mailto:chef@example.com"] {
            let result =
                StorefrontConfig::from_lookup(lookup_from(&[("GLOBAL_BITES_SITE_ORIGIN", origin)]));
            assert!(result.is_err(), "{origin} should be rejected");
        }
    }

    #[test]
    fn test_empty_data_dir() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[("GLOBAL_BITES_DATA_DIR", "")]));
        assert!(result.is_err());
    }
}
