// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, Response};
use loyalty_engine::config::Config;
use loyalty_engine::routes::create_router;
use loyalty_engine::services::{FixtureStore, LoyaltyStore};
use loyalty_engine::AppState;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Access token handed out by the stub token endpoint.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-access-token";

/// Basic credentials for `test_client_id:test_secret`.
#[allow(dead_code)]
pub const TEST_BASIC_AUTH: &str = "Basic dGVzdF9jbGllbnRfaWQ6dGVzdF9zZWNyZXQ=";

/// Create a test app backed by the built-in fixtures.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_store(LoyaltyStore::Fixture(FixtureStore::default()))
}

/// Create a test app with a specific data source.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: LoyaltyStore) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        store,
    });

    (create_router(state.clone()), state)
}

/// Create a test app proxying to `server`, with a token endpoint mounted.
#[allow(dead_code)]
pub async fn create_upstream_app(server: &MockServer) -> (axum::Router, Arc<AppState>) {
    mount_token_endpoint(server).await;
    create_app_with_config(Config::test_upstream(&server.uri()))
}

/// Create a test app from an explicit config; no stubs are mounted.
#[allow(dead_code)]
pub fn create_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let store = LoyaltyStore::from_config(&config).expect("store from config");
    let state = Arc::new(AppState { config, store });

    (create_router(state.clone()), state)
}

/// Stub the OAuth2 token endpoint used by `Config::test_upstream`.
#[allow(dead_code)]
pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("authorization", TEST_BASIC_AUTH))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": TEST_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

/// Issue a GET against the router.
#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as a string.
#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
