// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Loyalty Engine: read-through HTTP facade for loyalty program data
//!
//! Serves reward offers, user rewards, user profiles and reward
//! confirmations, either from a data store API authenticated with OAuth2
//! client credentials or from a built-in fixture dataset.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::LoyaltyStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: LoyaltyStore,
}
