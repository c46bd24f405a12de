// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for data store access and API responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Failure while fetching data from the configured data source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to obtain access token: {0}")]
    Token(String),

    #[error("request to data store failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("data store responded with status code: {0}")]
    Status(u16),

    #[error("failed to decode data store response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("{0} not present in fixture data")]
    Missing(String),
}

/// Handler error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested id is absent from the collection. `body` is the
    /// serialized empty record written with the 404, in field order.
    #[error("{resource} not found: {id}")]
    NotFound {
        resource: &'static str,
        id: String,
        body: Vec<u8>,
    },

    /// Any data source failure; the caller only sees `message`.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: FetchError,
    },
}

impl AppError {
    /// Not-found error carrying the empty value of the resource's type.
    pub fn not_found<T: serde::Serialize + Default>(resource: &'static str, id: &str) -> Self {
        AppError::NotFound {
            resource,
            id: id.to_string(),
            body: serde_json::to_vec(&T::default()).unwrap_or_else(|_| b"{}".to_vec()),
        }
    }

    /// Wrap a fetch failure with the plain-text message returned to callers.
    pub fn upstream(message: &'static str) -> impl FnOnce(FetchError) -> Self {
        move |source| AppError::Upstream { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { resource, id, body } => {
                tracing::info!(resource, id = %id, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response()
            }
            AppError::Upstream { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    message,
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
