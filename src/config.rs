// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Where loyalty data is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Proxy to the data store API.
    Upstream,
    /// Serve the built-in fixture dataset.
    Fixture,
}

impl FromStr for DataSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upstream" => Ok(DataSource::Upstream),
            "fixture" => Ok(DataSource::Fixture),
            other => Err(ConfigError::Invalid {
                name: "DATA_SOURCE",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Upstream => f.write_str("upstream"),
            DataSource::Fixture => f.write_str("fixture"),
        }
    }
}

/// OAuth2 client-credentials settings for the data store API.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub client_id: String,
    pub client_secret: String,
    /// OAuth2 token endpoint
    pub token_url: String,
    /// Base URL of the data store API
    pub data_store_api_url: String,
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("data_store_api_url", &self.data_store_api_url)
            .finish()
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    pub data_source: DataSource,
    /// Present when `data_source` is `Upstream`
    pub upstream: Option<UpstreamConfig>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present. Upstream credentials are only
    /// required when `DATA_SOURCE` is `upstream` (the default).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_source = match env::var("DATA_SOURCE") {
            Ok(value) => value.parse()?,
            Err(_) => DataSource::Upstream,
        };

        let upstream = match data_source {
            DataSource::Upstream => Some(UpstreamConfig {
                client_id: required("CLIENT_ID")?,
                client_secret: required("CLIENT_SECRET")?.trim().to_string(),
                token_url: required("TOKEN_URL")?,
                data_store_api_url: required("DATA_STORE_API_URL")?,
            }),
            DataSource::Fixture => None,
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            data_source,
            upstream,
        })
    }

    /// Fixture-backed config for tests.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            data_source: DataSource::Fixture,
            upstream: None,
        }
    }

    /// Upstream-backed config pointing both endpoints at `base_url`.
    pub fn test_upstream(base_url: &str) -> Self {
        Self {
            port: 8080,
            data_source: DataSource::Upstream,
            upstream: Some(UpstreamConfig {
                client_id: "test_client_id".to_string(),
                client_secret: "test_secret".to_string(),
                token_url: format!("{}/oauth2/token", base_url),
                data_store_api_url: base_url.to_string(),
            }),
        }
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
