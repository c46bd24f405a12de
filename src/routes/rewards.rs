// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward offer and reward confirmation routes.

use crate::error::{AppError, Result};
use crate::models::{RewardConfirmation, RewardOffer};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rewards", get(get_reward_offers))
        .route("/rewards/{id}", get(get_reward_offer))
        .route("/reward-confirmation", get(get_reward_confirmation))
}

const REWARD_OFFERS_FAILED: &str = "failed to fetch reward offers";
const REWARD_CONFIRMATION_FAILED: &str = "failed to fetch reward confirmation";

// ─── Reward Offers ───────────────────────────────────────────

/// Full reward catalog, in data store order.
async fn get_reward_offers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<RewardOffer>>> {
    tracing::info!("Get reward offers");

    let offers = state
        .store
        .reward_offers()
        .await
        .map_err(AppError::upstream(REWARD_OFFERS_FAILED))?;

    Ok(Json(offers))
}

/// Single reward offer by id. Unknown ids get a 404 with an empty offer.
async fn get_reward_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RewardOffer>> {
    let offers = state
        .store
        .reward_offers()
        .await
        .map_err(AppError::upstream(REWARD_OFFERS_FAILED))?;

    let offer = offers
        .into_iter()
        .find(|offer| offer.id == id)
        .ok_or_else(|| AppError::not_found::<RewardOffer>("reward offer", &id))?;

    tracing::info!(offer_id = %offer.id, name = %offer.name, "Get reward offer");
    Ok(Json(offer))
}

// ─── Reward Confirmation ─────────────────────────────────────

/// Missing parameters are passed to the data store as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ConfirmationQuery {
    user_id: String,
    reward_id: String,
}

async fn get_reward_confirmation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConfirmationQuery>,
) -> Result<Json<RewardConfirmation>> {
    tracing::info!(
        user_id = %query.user_id,
        reward_id = %query.reward_id,
        "Get reward confirmation"
    );

    let confirmation = state
        .store
        .reward_confirmation(&query.user_id, &query.reward_id)
        .await
        .map_err(AppError::upstream(REWARD_CONFIRMATION_FAILED))?;

    Ok(Json(confirmation))
}
