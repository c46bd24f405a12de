// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and user reward routes.

use crate::error::{AppError, Result};
use crate::models::{User, UserReward};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user-rewards", get(get_user_rewards))
        .route("/user/{id}", get(get_user))
}

/// All redemptions, in data store order.
async fn get_user_rewards(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserReward>>> {
    tracing::info!("Get user rewards");

    let rewards = state
        .store
        .user_rewards()
        .await
        .map_err(AppError::upstream("failed to fetch user rewards"))?;

    Ok(Json(rewards))
}

/// User profile by id. Unknown ids get a 404 with an empty user.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let users = state
        .store
        .users()
        .await
        .map_err(AppError::upstream("failed to fetch user details"))?;

    let user = users
        .into_iter()
        .find(|user| user.user_id == id)
        .ok_or_else(|| AppError::not_found::<User>("user", &id))?;

    tracing::info!(user_id = %user.user_id, "Get user details");
    Ok(Json(user))
}
