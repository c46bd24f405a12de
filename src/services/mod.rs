// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - data source access.

pub mod fixtures;
pub mod oauth;
pub mod store;
pub mod upstream;

pub use fixtures::FixtureStore;
pub use oauth::ClientCredentials;
pub use store::LoyaltyStore;
pub use upstream::DataStoreClient;
