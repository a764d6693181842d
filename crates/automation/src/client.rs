//! HTTP client for the external automation engine.
//!
//! Every request is a JSON POST of the tagged [`WebhookRequest`] to one
//! configured URL. The three trigger functions differ on a missing URL:
//! company research fails hard, the other two log and skip.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use webhooks::{CompanyResearch, GenerateContent, ScrapeReferencePost, WebhookRequest};

use crate::{AutomationConfig, DispatchError};

/// Header carrying the shared secret.
pub const SECRET_HEADER: &str = "x-webhook-secret";

/// What happened to an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "dispatch", rename_all = "snake_case")]
pub enum Dispatch {
    /// The engine accepted it.
    Sent { status: u16 },
    /// No URL configured; nothing was sent.
    Skipped,
}

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct AutomationClient {
    config: AutomationConfig,
    http: reqwest::Client,
}

impl AutomationClient {
    /// Build a client whose requests time out after `config.timeout`.
    pub fn new(config: AutomationConfig) -> Result<Self, DispatchError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn is_configured(&self) -> bool {
        self.config.webhook_url.is_some()
    }

    /// POST `request` to the engine.
    ///
    /// # Errors
    /// - [`DispatchError::NotConfigured`] when no URL is set.
    /// - [`DispatchError::Http`] on network failure or timeout.
    /// - [`DispatchError::Status`] on a non-2xx answer.
    #[instrument(skip(self, request), fields(action = %request.action(), subject = %request.subject_id()))]
    pub async fn send(&self, request: &WebhookRequest) -> Result<Dispatch, DispatchError> {
        let url = self
            .config
            .webhook_url
            .as_deref()
            .ok_or(DispatchError::NotConfigured(request.action()))?;

        debug!(url, "calling automation engine");

        let mut builder = self.http.post(url).json(request);
        if let Some(secret) = &self.config.webhook_secret {
            builder = builder.header(SECRET_HEADER, secret.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(DispatchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!(status = status.as_u16(), "automation engine accepted request");
        Ok(Dispatch::Sent {
            status: status.as_u16(),
        })
    }

    /// Start company research. Fails if the engine is not configured.
    pub async fn trigger_company_research(
        &self,
        company_id: impl Into<String>,
    ) -> Result<Dispatch, DispatchError> {
        let request = WebhookRequest::CompanyResearch(CompanyResearch {
            company_id: company_id.into(),
        });
        self.send(&request).await
    }

    /// Scrape a reference post. Skipped when the engine is not configured.
    pub async fn trigger_scrape_reference_post(
        &self,
        company_id: impl Into<String>,
        linkedin_url: impl Into<String>,
    ) -> Result<Dispatch, DispatchError> {
        let request = WebhookRequest::ScrapeReferencePost(ScrapeReferencePost {
            company_id: company_id.into(),
            linkedin_url: linkedin_url.into(),
        });
        self.send_or_skip(&request).await
    }

    /// Generate post content. Skipped when the engine is not configured.
    pub async fn trigger_generate_content(
        &self,
        payload: GenerateContent,
    ) -> Result<Dispatch, DispatchError> {
        self.send_or_skip(&WebhookRequest::GenerateContent(payload)).await
    }

    /// Send through the trigger function matching the request's action.
    pub async fn dispatch(&self, request: WebhookRequest) -> Result<Dispatch, DispatchError> {
        match request {
            WebhookRequest::CompanyResearch(p) => self.trigger_company_research(p.company_id).await,
            WebhookRequest::ScrapeReferencePost(p) => {
                self.trigger_scrape_reference_post(p.company_id, p.linkedin_url).await
            }
            WebhookRequest::GenerateContent(p) => self.trigger_generate_content(p).await,
        }
    }

    async fn send_or_skip(&self, request: &WebhookRequest) -> Result<Dispatch, DispatchError> {
        if !self.is_configured() {
            warn!(
                action = %request.action(),
                subject = %request.subject_id(),
                "automation webhook URL not configured, skipping"
            );
            return Ok(Dispatch::Skipped);
        }
        self.send(request).await
    }
}
