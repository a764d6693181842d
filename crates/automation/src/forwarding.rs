//! Router handlers that forward each action to the automation engine.

use async_trait::async_trait;
use serde_json::Value;

use webhooks::{
    ActionHandler, ActionPayload, CompanyResearch, GenerateContent, HandlerError,
    ScrapeReferencePost, WebhookRouter,
};

use crate::AutomationClient;

/// Forwards any payload through [`AutomationClient::dispatch`] and waits for
/// the engine's answer.
#[derive(Debug, Clone)]
pub struct ForwardingHandler {
    client: AutomationClient,
}

impl ForwardingHandler {
    pub fn new(client: AutomationClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<P: ActionPayload> ActionHandler<P> for ForwardingHandler {
    async fn handle(&self, payload: P) -> Result<Value, HandlerError> {
        let outcome = self
            .client
            .dispatch(payload.into_request())
            .await
            .map_err(|e| HandlerError::Dispatch(e.to_string()))?;
        serde_json::to_value(outcome).map_err(|e| HandlerError::Dispatch(e.to_string()))
    }
}

/// Bind every action to a [`ForwardingHandler`] over `client`.
pub fn install(router: &mut WebhookRouter, client: &AutomationClient) {
    let handler = ForwardingHandler::new(client.clone());
    router
        .register::<CompanyResearch, _>(handler.clone())
        .register::<ScrapeReferencePost, _>(handler.clone())
        .register::<GenerateContent, _>(handler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_engine::spawn_engine;
    use crate::AutomationConfig;
    use axum::http::StatusCode;
    use serde_json::json;
    use webhooks::WebhookError;

    #[tokio::test]
    async fn installed_router_forwards_every_action() {
        let engine = spawn_engine(StatusCode::ACCEPTED).await;
        let client = AutomationClient::new(AutomationConfig::with_url(engine.url.clone())).unwrap();

        let mut router = WebhookRouter::new();
        install(&mut router, &client);
        assert_eq!(router.registered_actions().len(), 3);

        let out = router
            .route(
                ScrapeReferencePost {
                    company_id: "co_3".into(),
                    linkedin_url: "https://linkedin.com/p/1".into(),
                }
                .into_request(),
            )
            .await
            .unwrap();

        assert_eq!(out, json!({ "dispatch": "sent", "status": 202 }));
        assert_eq!(engine.requests()[0].body["action"], "scrape-reference-post");
    }

    #[tokio::test]
    async fn unconfigured_research_surfaces_as_dispatch_error() {
        let client = AutomationClient::new(AutomationConfig::default()).unwrap();
        let mut router = WebhookRouter::new();
        install(&mut router, &client);

        let err = router
            .route(CompanyResearch { company_id: "co_1".into() }.into_request())
            .await
            .unwrap_err();
        assert!(matches!(err, WebhookError::Handler(HandlerError::Dispatch(_))));

        let skipped = router
            .route(GenerateContent::for_post("p_1").into_request())
            .await
            .unwrap();
        assert_eq!(skipped, json!({ "dispatch": "skipped" }));
    }
}
