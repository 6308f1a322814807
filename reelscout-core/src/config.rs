//! Centralized configuration for Reelscout.
//!
//! All tunable parameters are defined here and handed to components
//! explicitly. Nothing below the binary reads the process environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::mode::RuntimeMode;
use crate::{ReelscoutError, Result};

/// Environment variable holding the OMDb API key.
pub const OMDB_API_KEY_VAR: &str = "OMDB_API_KEY";

/// Central configuration for all Reelscout components.
#[derive(Debug, Clone, Default)]
pub struct ReelscoutConfig {
    pub omdb: OmdbConfig,
    pub server: ServerConfig,
    pub mode: RuntimeMode,
}

/// OMDb API access settings.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// Base URL of the API, query parameters are appended to it
    pub base_url: String,
    /// API key sent as `apikey`; `None` means lookups fail with a configuration error
    pub api_key: Option<String>,
    /// Timeout for a single outbound request
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(10),
            user_agent: "reelscout/0.1.0",
        }
    }
}

impl OmdbConfig {
    /// Creates a config with the given key, treating blank keys as absent.
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            api_key: normalize_api_key(api_key),
            ..Default::default()
        }
    }

    /// Returns true when a usable API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

/// HTTP listener settings for the web front-end.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Resolves host and port into a bindable socket address.
    ///
    /// # Errors
    /// - `ReelscoutError::Configuration` - host is not an IP address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ReelscoutError::Configuration {
                reason: format!("invalid listen address {}:{}: {e}", self.host, self.port),
            })
    }
}

impl ReelscoutConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// # Errors
    /// - `ReelscoutError::Configuration` - an override is present but malformed
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    ///
    /// Recognized names: `OMDB_API_KEY`, `REELSCOUT_OMDB_URL`,
    /// `REELSCOUT_HTTP_TIMEOUT` (seconds), `REELSCOUT_HOST`, `REELSCOUT_PORT`
    /// and `REELSCOUT_MODE`.
    ///
    /// # Errors
    /// - `ReelscoutError::Configuration` - an override is present but malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.omdb.api_key = normalize_api_key(lookup(OMDB_API_KEY_VAR));

        if let Some(url) = lookup("REELSCOUT_OMDB_URL") {
            config.omdb.base_url = url;
        }

        if let Some(timeout) = lookup("REELSCOUT_HTTP_TIMEOUT") {
            let seconds = timeout
                .parse::<u64>()
                .map_err(|e| ReelscoutError::Configuration {
                    reason: format!("REELSCOUT_HTTP_TIMEOUT={timeout}: {e}"),
                })?;
            config.omdb.request_timeout = Duration::from_secs(seconds);
        }

        if let Some(host) = lookup("REELSCOUT_HOST") {
            config.server.host = host;
        }

        if let Some(port) = lookup("REELSCOUT_PORT") {
            config.server.port = port
                .parse::<u16>()
                .map_err(|e| ReelscoutError::Configuration {
                    reason: format!("REELSCOUT_PORT={port}: {e}"),
                })?;
        }

        if let Some(mode) = lookup("REELSCOUT_MODE") {
            config.mode = mode
                .parse()
                .map_err(|reason| ReelscoutError::Configuration { reason })?;
        }

        Ok(config)
    }

    /// Creates a configuration pointed at a local stub of the OMDb API.
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            omdb: OmdbConfig {
                base_url: base_url.to_string(),
                api_key: Some("test-key".to_string()),
                request_timeout: Duration::from_secs(2),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn normalize_api_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = ReelscoutConfig::default();

        assert_eq!(config.omdb.base_url, "https://www.omdbapi.com/");
        assert_eq!(config.omdb.api_key, None);
        assert_eq!(config.omdb.request_timeout, Duration::from_secs(10));
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.mode, RuntimeMode::Production);
        assert!(!config.omdb.has_api_key());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ReelscoutConfig::from_lookup(lookup_from(&[
            ("OMDB_API_KEY", "abc123"),
            ("REELSCOUT_OMDB_URL", "http://127.0.0.1:9000/"),
            ("REELSCOUT_HTTP_TIMEOUT", "3"),
            ("REELSCOUT_HOST", "0.0.0.0"),
            ("REELSCOUT_PORT", "8080"),
            ("REELSCOUT_MODE", "dev"),
        ]))
        .unwrap();

        assert_eq!(config.omdb.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.omdb.base_url, "http://127.0.0.1:9000/");
        assert_eq!(config.omdb.request_timeout, Duration::from_secs(3));
        assert_eq!(config.server.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert!(config.mode.is_development());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = ReelscoutConfig::from_lookup(lookup_from(&[("OMDB_API_KEY", "   ")])).unwrap();
        assert_eq!(config.omdb.api_key, None);
        assert!(!OmdbConfig::with_api_key(Some(String::new())).has_api_key());
    }

    #[test]
    fn test_malformed_override_is_rejected() {
        let err = ReelscoutConfig::from_lookup(lookup_from(&[("REELSCOUT_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.is_user_error());

        let err = ReelscoutConfig::from_lookup(lookup_from(&[("REELSCOUT_MODE", "staging")]))
            .unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_invalid_host_fails_socket_resolution() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            port: 80,
        };
        assert!(server.socket_addr().is_err());
    }
}
