// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod reward;
pub mod user;

pub use reward::{RewardConfirmation, RewardOffer, UserReward};
pub use user::User;
