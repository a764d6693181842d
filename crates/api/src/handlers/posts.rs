use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use ::webhooks::{ActionPayload, GenerateContent};
use workflow::{
    apply_transition, available_actions, ContentStatus, GeneratedPost, NewPost, TransitionAction,
    TransitionRequest,
};

use super::{acting_role, acting_user, AppState};
use crate::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<ContentStatus>,
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<GeneratedPost>), ApiError> {
    let Json(payload) = payload?;
    let post = state.store.insert(GeneratedPost::from(payload)).await?;
    info!(post_id = %post.id, company_id = %post.company_id, "created draft post");
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<GeneratedPost>>, ApiError> {
    Ok(Json(state.store.list(params.status).await?))
}

pub async fn get(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<GeneratedPost>, ApiError> {
    Ok(Json(state.store.get(id).await?))
}

#[derive(Debug, Serialize)]
pub struct ActionsResponse {
    pub status: ContentStatus,
    pub actions: Vec<TransitionAction>,
}

/// What the caller's role can do with this post right now.
pub async fn actions(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ActionsResponse>, ApiError> {
    let post = state.store.get(id).await?;
    Ok(Json(ActionsResponse {
        status: post.status,
        actions: available_actions(post.status, acting_role(&headers)),
    }))
}

pub async fn transition(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Result<Json<TransitionRequest>, JsonRejection>,
) -> Result<Json<GeneratedPost>, ApiError> {
    let Json(mut request) = request?;
    // The host application's user header outranks anything in the body.
    if let Some(user) = acting_user(&headers) {
        request.actor = Some(user);
    }

    let current = state.store.get(id).await?;
    debug!(post_id = %id, from = %current.status, to = %request.to, "transition requested");
    let next = apply_transition(&current, &request, acting_role(&headers), Utc::now())?;
    if next.status == current.status {
        return Ok(Json(current));
    }

    Ok(Json(state.store.update(next, current.updated_at).await?))
}

/// Optional generation settings; the source fields come from the post.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    pub input_text: Option<String>,
    pub generate_image: Option<bool>,
    pub generate_slideshow: Option<bool>,
    pub custom_instructions: Option<String>,
    pub cta: Option<String>,
}

/// Ask the automation engine to (re)generate this post's content.
/// Returns as soon as the request is handed off.
///
/// An empty body means default options; a body that is present must parse.
pub async fn generate(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let options = parse_options(&body)?;
    let post = state.store.get(id).await?;

    let payload = GenerateContent {
        generated_post_id: post.id.to_string(),
        input_type: post.input_type,
        input_url: post.input_url,
        input_text: options.input_text,
        generate_image: options.generate_image,
        generate_slideshow: options.generate_slideshow,
        custom_instructions: options.custom_instructions,
        cta: options.cta,
    };
    // Detached: the caller gets 202 whatever the engine later says.
    let _ = state.route_in_background(payload.into_request());

    Ok(StatusCode::ACCEPTED)
}

fn parse_options(body: &[u8]) -> Result<GenerateOptions, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateOptions::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid generate options: {e}")))
}
