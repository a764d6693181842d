use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use ::webhooks::WebhookRequest;

use super::AppState;
use crate::ApiError;

/// Accept a tagged webhook request, check its shape, and route it.
pub async fn handle_webhook(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload?;
    let request: WebhookRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::BadRequest(format!("invalid webhook payload: {e}")))?;

    info!(action = %request.action(), subject = %request.subject_id(), "webhook received");

    Ok(Json(state.router.route(request).await?))
}
