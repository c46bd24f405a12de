// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data store API client.
//!
//! Every call is a single authenticated GET whose JSON body is decoded into
//! the requested type. Failures are classified as transport, status or
//! decode errors; nothing is retried.

use crate::config::UpstreamConfig;
use crate::error::FetchError;
use crate::models::{RewardConfirmation, RewardOffer, User, UserReward};
use crate::services::oauth::ClientCredentials;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Data store API client.
#[derive(Clone)]
pub struct DataStoreClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<ClientCredentials>,
}

impl DataStoreClient {
    /// Create a client for the configured data store and token endpoint.
    pub fn new(config: &UpstreamConfig) -> Self {
        let http = reqwest::Client::new();
        let credentials = Arc::new(ClientCredentials::new(http.clone(), config));
        Self {
            http,
            base_url: config.data_store_api_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full reward offer catalog.
    pub async fn fetch_reward_offers(&self) -> Result<Vec<RewardOffer>, FetchError> {
        let offers: Vec<RewardOffer> = self.get_json("reward-offers", &[]).await?;
        tracing::info!(count = offers.len(), "Fetched reward offers");
        Ok(offers)
    }

    /// All user reward redemptions.
    pub async fn fetch_user_rewards(&self) -> Result<Vec<UserReward>, FetchError> {
        let rewards: Vec<UserReward> = self.get_json("user-rewards", &[]).await?;
        tracing::info!(count = rewards.len(), "Fetched user rewards");
        Ok(rewards)
    }

    /// All users.
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let users: Vec<User> = self.get_json("users", &[]).await?;
        tracing::info!(count = users.len(), "Fetched users");
        Ok(users)
    }

    /// Confirmation for a user/reward pair. Empty ids are sent as-is.
    pub async fn fetch_reward_confirmation(
        &self,
        user_id: &str,
        reward_id: &str,
    ) -> Result<RewardConfirmation, FetchError> {
        let confirmation: RewardConfirmation = self
            .get_json(
                "reward-confirmation",
                &[("userId", user_id), ("rewardId", reward_id)],
            )
            .await?;
        tracing::info!(user_id, reward_id, "Fetched reward confirmation");
        Ok(confirmation)
    }

    /// Generic authenticated GET with JSON response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, resource);
        let token = self.credentials.access_token().await?;

        let mut request = self.http.get(&url).bearer_auth(&token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Data store request failed");
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status_code = status.as_u16(),
                url = %url,
                "Data store responded with non-success status"
            );
            // Force a new token on the next request; this one is not retried.
            if status == StatusCode::UNAUTHORIZED {
                self.credentials.invalidate(&token).await;
            }
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to read data store response");
            FetchError::Transport(e)
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to decode data store response");
            FetchError::Decode(e)
        })
    }
}
