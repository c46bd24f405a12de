// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in fixture dataset for running without a data store.

use crate::error::FetchError;
use crate::models::{RewardConfirmation, RewardOffer, User, UserReward};
use std::sync::Arc;

/// Read-only in-memory loyalty data.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    data: Arc<FixtureData>,
}

#[derive(Debug, Default)]
struct FixtureData {
    reward_offers: Vec<RewardOffer>,
    user_rewards: Vec<UserReward>,
    users: Vec<User>,
    confirmations: Vec<RewardConfirmation>,
}

impl Default for FixtureStore {
    /// The built-in sample dataset.
    fn default() -> Self {
        Self::new(
            sample_reward_offers(),
            sample_user_rewards(),
            sample_users(),
            sample_confirmations(),
        )
    }
}

impl FixtureStore {
    pub fn new(
        reward_offers: Vec<RewardOffer>,
        user_rewards: Vec<UserReward>,
        users: Vec<User>,
        confirmations: Vec<RewardConfirmation>,
    ) -> Self {
        Self {
            data: Arc::new(FixtureData {
                reward_offers,
                user_rewards,
                users,
                confirmations,
            }),
        }
    }

    /// A store with no records at all.
    pub fn empty() -> Self {
        Self {
            data: Arc::new(FixtureData::default()),
        }
    }

    pub fn reward_offers(&self) -> Vec<RewardOffer> {
        self.data.reward_offers.clone()
    }

    pub fn user_rewards(&self) -> Vec<UserReward> {
        self.data.user_rewards.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.data.users.clone()
    }

    pub fn reward_confirmation(
        &self,
        user_id: &str,
        reward_id: &str,
    ) -> Result<RewardConfirmation, FetchError> {
        self.data
            .confirmations
            .iter()
            .find(|c| c.user_id == user_id && c.reward_id == reward_id)
            .cloned()
            .ok_or_else(|| {
                FetchError::Missing(format!(
                    "reward confirmation for user '{}' and reward '{}'",
                    user_id, reward_id
                ))
            })
    }
}

fn offer(
    id: &str,
    name: &str,
    value: f32,
    total_points: i64,
    description: &str,
    logo: &str,
) -> RewardOffer {
    RewardOffer {
        id: id.to_string(),
        name: name.to_string(),
        value,
        total_points,
        description: description.to_string(),
        logo_url: logo.to_string(),
    }
}

fn sample_reward_offers() -> Vec<RewardOffer> {
    vec![
        offer(
            "RWD34589",
            "Target",
            25.0,
            500,
            "A $25 Target gift card, redeemable in store and online.",
            "/images/target.png",
        ),
        offer(
            "RWD34590",
            "Starbucks Coffee",
            15.0,
            300,
            "A $15 Starbucks gift card for coffee and snacks.",
            "/images/starbucks.png",
        ),
        offer(
            "RWD34591",
            "Jumba Juice",
            10.0,
            200,
            "A $10 voucher for any smoothie or juice.",
            "/images/jamba.png",
        ),
        offer(
            "RWD34592",
            "Grubhub",
            20.0,
            400,
            "A $20 Grubhub credit for food delivery.",
            "/images/grubhub.png",
        ),
    ]
}

fn sample_users() -> Vec<User> {
    [
        ("U134562", "John", "Doe", "john.doe@example.com"),
        ("U134563", "Jane", "Smith", "jane.smith@example.com"),
        ("U134564", "Alex", "Taylor", "alex.taylor@example.com"),
    ]
    .into_iter()
    .map(|(id, first, last, email)| User {
        user_id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
    })
    .collect()
}

fn sample_user_rewards() -> Vec<UserReward> {
    [
        ("U134562", "RWD34589", "2023-10-01T10:15:00Z", true),
        ("U134563", "RWD34590", "2023-10-02T14:30:00Z", true),
        ("U134564", "RWD34592", "2023-10-03T09:45:00Z", false),
    ]
    .into_iter()
    .map(|(user_id, reward_id, timestamp, accepted)| UserReward {
        user_id: user_id.to_string(),
        selected_reward_deal_id: reward_id.to_string(),
        timestamp: timestamp.to_string(),
        accepted_tnc: accepted,
    })
    .collect()
}

/// 1x1 transparent PNG used as the placeholder QR image.
const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

fn sample_confirmations() -> Vec<RewardConfirmation> {
    sample_user_rewards()
        .into_iter()
        .filter(|reward| reward.accepted_tnc)
        .map(|reward| RewardConfirmation {
            user_id: reward.user_id,
            reward_id: reward.selected_reward_deal_id,
            reward_confirmation_qr_code: PLACEHOLDER_PNG.to_vec(),
        })
        .collect()
}
