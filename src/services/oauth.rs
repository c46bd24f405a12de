// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth2 client-credentials token provider for the data store API.
//!
//! Tokens are cached in memory and reused until shortly before they expire.
//! Concurrent requests that find a stale token serialize on a refresh lock
//! so only one of them hits the token endpoint.

use crate::config::UpstreamConfig;
use crate::error::FetchError;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

/// Margin before token expiration when we proactively refresh.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(10);

/// Token endpoint response (RFC 6749 section 5.1).
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Clone)]
struct CachedToken {
    access_token: String,
    /// `None` means the token endpoint gave no lifetime.
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires_at) => now + TOKEN_EXPIRY_MARGIN < expires_at,
            None => true,
        }
    }
}

/// Client-credentials grant with an in-memory token cache.
pub struct ClientCredentials {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cache: RwLock<Option<CachedToken>>,
    refresh_lock: Mutex<()>,
}

impl ClientCredentials {
    pub fn new(http: reqwest::Client, config: &UpstreamConfig) -> Self {
        Self {
            http,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Return a valid access token, requesting a new one if needed.
    pub async fn access_token(&self) -> Result<String, FetchError> {
        if let Some(token) = self.cached().await {
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another task may have refreshed while we were waiting.
        if let Some(token) = self.cached().await {
            return Ok(token);
        }

        let requested_at = Instant::now();
        let response = self.request_token().await?;
        let expires_at = response
            .expires_in
            .and_then(|secs| requested_at.checked_add(Duration::from_secs(secs)));

        tracing::debug!(
            token_type = response.token_type.as_deref().unwrap_or("bearer"),
            expires_in = response.expires_in,
            "Obtained data store access token"
        );

        *self.cache.write().await = Some(CachedToken {
            access_token: response.access_token.clone(),
            expires_at,
        });

        Ok(response.access_token)
    }

    /// Drop `rejected` from the cache so the next call fetches a new token.
    ///
    /// A newer token cached since `rejected` was issued is kept.
    pub async fn invalidate(&self, rejected: &str) {
        let mut cache = self.cache.write().await;
        if cache
            .as_ref()
            .is_some_and(|token| token.access_token == rejected)
        {
            *cache = None;
        }
    }

    async fn cached(&self) -> Option<String> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|token| token.is_fresh(Instant::now()))
            .map(|token| token.access_token.clone())
    }

    async fn request_token(&self) -> Result<TokenResponse, FetchError> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| FetchError::Token(format!("token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status_code = status.as_u16(), "Token endpoint rejected request");
            return Err(FetchError::Token(format!("HTTP {}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Token(format!("JSON parse error: {}", e)))?;

        if token.access_token.is_empty() {
            return Err(FetchError::Token(
                "server response missing access_token".to_string(),
            ));
        }

        Ok(token)
    }
}
