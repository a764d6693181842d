//! Route handlers and the state they share.

pub mod health;
pub mod posts;
pub mod webhooks;

use std::sync::Arc;

use axum::http::HeaderMap;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use ::webhooks::{WebhookError, WebhookRequest, WebhookRouter};
use store::PostStore;
use workflow::UserRole;

/// Header the host application sets with the caller's role.
pub const ROLE_HEADER: &str = "x-user-role";
/// Header with the caller's user id, recorded as the reviewer.
pub const USER_HEADER: &str = "x-user-id";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub router: Arc<WebhookRouter>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>, router: Arc<WebhookRouter>) -> Self {
        Self { store, router }
    }

    /// Route `request` on a background task. Handlers never wait on the
    /// handle; failures are logged with the subject id before it resolves.
    pub fn route_in_background(
        &self,
        request: WebhookRequest,
    ) -> JoinHandle<Result<Value, WebhookError>> {
        let router = Arc::clone(&self.router);
        tokio::spawn(async move {
            let action = request.action();
            let subject = request.subject_id().to_owned();
            let outcome = router.route(request).await;
            if let Err(e) = &outcome {
                error!(%action, %subject, error = %e, "background webhook dispatch failed");
            }
            outcome
        })
    }
}

/// Role from [`ROLE_HEADER`]. Missing or unrecognised values mean no role.
pub fn acting_role(headers: &HeaderMap) -> Option<UserRole> {
    let raw = headers.get(ROLE_HEADER)?.to_str().ok()?;
    match raw.trim().parse() {
        Ok(role) => Some(role),
        Err(e) => {
            warn!(error = %e, "ignoring unrecognised role header");
            None
        }
    }
}

pub fn acting_user(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::webhooks::mock::MockHandler;
    use ::webhooks::{ActionPayload, GenerateContent, HandlerError};
    use axum::http::HeaderValue;
    use serde_json::json;
    use store::MemoryStore;

    fn state_with(router: WebhookRouter) -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), Arc::new(router))
    }

    #[tokio::test]
    async fn background_route_resolves_to_handler_result() {
        let mock = MockHandler::returning(json!({ "queued": true }));
        let mut router = WebhookRouter::new();
        router.register::<GenerateContent, _>(mock.clone());

        let outcome = state_with(router)
            .route_in_background(GenerateContent::for_post("p_1").into_request())
            .await
            .expect("task must not panic");

        assert_eq!(outcome.unwrap(), json!({ "queued": true }));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn background_route_reports_failures() {
        let missing = state_with(WebhookRouter::new())
            .route_in_background(GenerateContent::for_post("p_1").into_request())
            .await
            .unwrap();
        assert!(matches!(missing, Err(WebhookError::HandlerNotRegistered(_))));

        let mut router = WebhookRouter::new();
        router.register::<GenerateContent, _>(MockHandler::failing(HandlerError::Dispatch(
            "engine down".into(),
        )));
        let failed = state_with(router)
            .route_in_background(GenerateContent::for_post("p_2").into_request())
            .await
            .unwrap();
        assert!(matches!(
            failed,
            Err(WebhookError::Handler(HandlerError::Dispatch(_)))
        ));
    }

    #[test]
    fn role_header_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(acting_role(&headers), None);

        headers.insert(ROLE_HEADER, HeaderValue::from_static("reviewer"));
        assert_eq!(acting_role(&headers), Some(UserRole::Reviewer));

        headers.insert(ROLE_HEADER, HeaderValue::from_static("superuser"));
        assert_eq!(acting_role(&headers), None);
    }

    #[test]
    fn user_header_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static("  "));
        assert_eq!(acting_user(&headers), None);

        headers.insert(USER_HEADER, HeaderValue::from_static("u_17"));
        assert_eq!(acting_user(&headers).as_deref(), Some("u_17"));
    }
}
