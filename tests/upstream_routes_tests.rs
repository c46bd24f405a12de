// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route tests proxying to a stubbed data store.

use axum::http::{header, StatusCode};
use loyalty_engine::config::Config;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

fn sample_users() -> serde_json::Value {
    json!([
        {"userId": "U1", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
        {"userId": "U2", "firstName": "Alan", "lastName": "Turing", "email": "alan@example.com"}
    ])
}

const FAILURE_CASES: [(&str, &str); 5] = [
    ("/rewards", "failed to fetch reward offers"),
    ("/rewards/RWD1", "failed to fetch reward offers"),
    ("/user-rewards", "failed to fetch user rewards"),
    ("/user/U1", "failed to fetch user details"),
    (
        "/reward-confirmation?userId=U1&rewardId=RWD1",
        "failed to fetch reward confirmation",
    ),
];

async fn assert_all_endpoints_fail(app: axum::Router) {
    for (uri, message) in FAILURE_CASES {
        let response = common::get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(common::body_string(response).await, message, "{uri}");
    }
}

#[tokio::test]
async fn test_get_user_proxied() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;
    mount_json(&server, "/users", sample_users()).await;

    let response = common::get(app, "/user/U2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        json!({"userId": "U2", "firstName": "Alan", "lastName": "Turing", "email": "alan@example.com"})
    );
}

#[tokio::test]
async fn test_get_user_miss_against_empty_upstream() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;
    mount_json(&server, "/users", json!([])).await;

    let response = common::get(app, "/user/U999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        common::body_string(response).await,
        r#"{"userId":"","firstName":"","lastName":"","email":""}"#
    );
}

#[tokio::test]
async fn test_list_rewards_unfiltered() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;
    let offers = json!([
        {"id": "RWD2", "name": "Grubhub", "value": 20.0, "totalPoints": 400,
         "description": "Delivery credit", "logoUrl": "/images/grubhub.png"},
        {"id": "RWD1", "name": "Target", "value": 25.0, "totalPoints": 500,
         "description": "Gift card", "logoUrl": "/images/target.png"}
    ]);
    mount_json(&server, "/reward-offers", offers.clone()).await;

    let response = common::get(app, "/rewards").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, offers);
}

#[tokio::test]
async fn test_get_reward_offer_proxied_and_missing() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;
    mount_json(
        &server,
        "/reward-offers",
        json!([{"id": "RWD1", "name": "Target", "value": 25.0, "totalPoints": 500,
                "description": "Gift card", "logoUrl": "/images/target.png"}]),
    )
    .await;

    let response = common::get(app.clone(), "/rewards/RWD1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["name"], "Target");

    let response = common::get(app, "/rewards/RWD9").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(common::body_json(response).await["id"], "");
}

#[tokio::test]
async fn test_reward_confirmation_proxied() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;

    Mock::given(method("GET"))
        .and(path("/reward-confirmation"))
        .and(query_param("userId", "U1"))
        .and(query_param("rewardId", "RWD1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": "U1",
            "rewardId": "RWD1",
            "rewardConfirmationQrCode": "cXI="
        })))
        .mount(&server)
        .await;

    let response = common::get(app, "/reward-confirmation?userId=U1&rewardId=RWD1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        json!({"userId": "U1", "rewardId": "RWD1", "rewardConfirmationQrCode": "cXI="})
    );
}

#[tokio::test]
async fn test_reward_confirmation_missing_param_passed_through() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;

    Mock::given(method("GET"))
        .and(path("/reward-confirmation"))
        .and(query_param("userId", "U1"))
        .and(query_param("rewardId", ""))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let response = common::get(app, "/reward-confirmation?userId=U1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_upstream_status_failure_is_500_everywhere() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;
    for route in ["/reward-offers", "/user-rewards", "/users", "/reward-confirmation"] {
        mount_status(&server, route, 502).await;
    }

    assert_all_endpoints_fail(app).await;
}

#[tokio::test]
async fn test_token_rejection_is_500_everywhere() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})))
        .mount(&server)
        .await;

    // The data store is never reached without a token.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (app, _) = common::create_app_with_config(Config::test_upstream(&server.uri()));
    assert_all_endpoints_fail(app).await;
}

#[tokio::test]
async fn test_unreachable_data_store_is_500_everywhere() {
    let server = MockServer::start().await;
    common::mount_token_endpoint(&server).await;

    let mut config = Config::test_upstream(&server.uri());
    if let Some(upstream) = config.upstream.as_mut() {
        // Nothing listens on port 1
        upstream.data_store_api_url = "http://127.0.0.1:1".to_string();
    }

    let (app, _) = common::create_app_with_config(config);
    assert_all_endpoints_fail(app).await;
}

#[tokio::test]
async fn test_malformed_upstream_json_is_500() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"userId\": "))
        .mount(&server)
        .await;

    let response = common::get(app, "/user/U1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_string(response).await,
        "failed to fetch user details"
    );
}

#[tokio::test]
async fn test_health_reports_upstream() {
    let server = MockServer::start().await;
    let (app, _) = common::create_upstream_app(&server).await;

    let response = common::get(app, "/health").await;
    assert_eq!(common::body_json(response).await["dataSource"], "upstream");
}
