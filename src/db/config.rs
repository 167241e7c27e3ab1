//! Connection settings for the hosted backend.
//!
//! The endpoint and access key come from the environment (usually populated
//! from a local `.env` file by the binary). Both are required; nothing is sent
//! over the network until they have been validated.

use std::fmt;

use reqwest::Url;

use super::backend::DataClient;
use super::rest::RestClient;
use super::DbError;
use crate::config::ConfigError;

/// Environment variable holding the service endpoint URL.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the access key.
pub const KEY_VAR: &str = "SUPABASE_KEY";

/// Validated endpoint and key for the remote service.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub url: Url,
    pub key: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url.as_str())
            .field("key", &"<redacted>")
            .finish()
    }
}

impl ClientConfig {
    /// Build from an endpoint URL and key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` unless `url` parses as an absolute
    /// http or https URL.
    pub fn new(url: &str, key: impl Into<String>) -> Result<Self, ConfigError> {
        let parsed = Url::parse(url.trim()).map_err(|e| ConfigError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            url: parsed,
            key: key.into(),
        })
    }

    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// Blank values count as missing. The URL is checked before the key so
    /// the first reported problem matches the order of the `.env` template.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar { name })
        };

        let url = required(URL_VAR)?;
        let key = required(KEY_VAR)?;
        Self::new(&url, key.trim())
    }

    /// Create a client for this configuration.
    pub fn connect(&self) -> Result<Box<dyn DataClient>, DbError> {
        Ok(Box::new(RestClient::new(self)?))
    }
}
