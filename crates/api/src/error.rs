//! Mapping domain errors onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use store::StoreError;
use webhooks::{HandlerError, WebhookError};
use workflow::TransitionError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Webhook(#[from] WebhookError),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Transition(TransitionError::MissingRole { .. })
            | Self::Transition(TransitionError::PermissionDenied { .. }) => StatusCode::FORBIDDEN,
            Self::Transition(_) => StatusCode::UNPROCESSABLE_ENTITY,

            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::AlreadyExists(_))
            | Self::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,

            Self::Webhook(WebhookError::HandlerNotRegistered(_)) => StatusCode::NOT_IMPLEMENTED,
            Self::Webhook(WebhookError::Handler(HandlerError::Rejected(_))) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Webhook(WebhookError::Handler(HandlerError::Dispatch(_))) => StatusCode::BAD_GATEWAY,
            Self::Webhook(WebhookError::PayloadMismatch { .. }) => StatusCode::INTERNAL_SERVER_ERROR,

            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Transition(e) => e.code(),
            Self::Store(StoreError::NotFound(_)) => "NOT_FOUND",
            Self::Store(StoreError::AlreadyExists(_)) => "ALREADY_EXISTS",
            Self::Store(StoreError::Conflict(_)) => "CONFLICT",
            Self::Webhook(e) => e.code(),
            Self::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, code = self.code(), "request failed");
        }

        let mut body = json!({ "code": self.code(), "error": self.to_string() });
        if let Self::Transition(e) = &self {
            if let Some(fields) = e.missing_fields() {
                body["missingFields"] = json!(fields);
            }
        }

        (status, Json(body)).into_response()
    }
}
