// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data source selected at startup.

use crate::config::{Config, ConfigError, DataSource};
use crate::error::FetchError;
use crate::models::{RewardConfirmation, RewardOffer, User, UserReward};
use crate::services::{DataStoreClient, FixtureStore};

/// Where handlers read loyalty data from.
#[derive(Clone)]
pub enum LoyaltyStore {
    Upstream(DataStoreClient),
    Fixture(FixtureStore),
}

impl LoyaltyStore {
    /// Build the store named by `config.data_source`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        match config.data_source {
            DataSource::Upstream => {
                let upstream = config
                    .upstream
                    .as_ref()
                    .ok_or(ConfigError::Missing("DATA_STORE_API_URL"))?;
                Ok(LoyaltyStore::Upstream(DataStoreClient::new(upstream)))
            }
            DataSource::Fixture => Ok(LoyaltyStore::Fixture(FixtureStore::default())),
        }
    }

    pub async fn reward_offers(&self) -> Result<Vec<RewardOffer>, FetchError> {
        match self {
            LoyaltyStore::Upstream(client) => client.fetch_reward_offers().await,
            LoyaltyStore::Fixture(fixtures) => Ok(fixtures.reward_offers()),
        }
    }

    pub async fn user_rewards(&self) -> Result<Vec<UserReward>, FetchError> {
        match self {
            LoyaltyStore::Upstream(client) => client.fetch_user_rewards().await,
            LoyaltyStore::Fixture(fixtures) => Ok(fixtures.user_rewards()),
        }
    }

    pub async fn users(&self) -> Result<Vec<User>, FetchError> {
        match self {
            LoyaltyStore::Upstream(client) => client.fetch_users().await,
            LoyaltyStore::Fixture(fixtures) => Ok(fixtures.users()),
        }
    }

    pub async fn reward_confirmation(
        &self,
        user_id: &str,
        reward_id: &str,
    ) -> Result<RewardConfirmation, FetchError> {
        match self {
            LoyaltyStore::Upstream(client) => {
                client.fetch_reward_confirmation(user_id, reward_id).await
            }
            LoyaltyStore::Fixture(fixtures) => fixtures.reward_confirmation(user_id, reward_id),
        }
    }
}
