// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward catalog, redemption and confirmation models.

use serde::{Deserialize, Serialize};

/// A redeemable catalog item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardOffer {
    pub id: String,
    pub name: String,
    /// Monetary value of the offer
    pub value: f32,
    /// Point cost to redeem
    pub total_points: i64,
    pub description: String,
    pub logo_url: String,
}

/// A user's redemption choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReward {
    pub user_id: String,
    pub selected_reward_deal_id: String,
    /// Passed through as sent by the data store
    pub timestamp: String,
    #[serde(rename = "acceptedTnC")]
    pub accepted_tnc: bool,
}

/// Proof of redemption for a user/reward pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardConfirmation {
    pub user_id: String,
    pub reward_id: String,
    /// QR code image bytes, base64 on the wire
    #[serde(with = "base64_bytes", default)]
    pub reward_confirmation_qr_code: Vec<u8>,
}

/// Standard padded base64 for binary payloads. `null` decodes to empty.
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
