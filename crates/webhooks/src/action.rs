//! Webhook actions and their payloads.
//!
//! On the wire every request is a flat JSON object tagged by `action`:
//!
//! ```json
//! { "action": "scrape-reference-post", "companyId": "…", "linkedinUrl": "…" }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use workflow::InputType;

// ---------------------------------------------------------------------------
// WebhookAction
// ---------------------------------------------------------------------------

/// Tag identifying which handler a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WebhookAction {
    CompanyResearch,
    ScrapeReferencePost,
    GenerateContent,
}

impl WebhookAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyResearch => "company-research",
            Self::ScrapeReferencePost => "scrape-reference-post",
            Self::GenerateContent => "generate-content",
        }
    }
}

impl fmt::Display for WebhookAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company-research"      => Ok(Self::CompanyResearch),
            "scrape-reference-post" => Ok(Self::ScrapeReferencePost),
            "generate-content"      => Ok(Self::GenerateContent),
            other                   => Err(format!("unknown webhook action: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Research a company's positioning and voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResearch {
    pub company_id: String,
}

/// Pull a reference LinkedIn post for a company's style profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeReferencePost {
    pub company_id: String,
    pub linkedin_url: String,
}

/// Generate (or regenerate) the content of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContent {
    pub generated_post_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_image: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_slideshow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

impl GenerateContent {
    pub fn for_post(generated_post_id: impl Into<String>) -> Self {
        Self {
            generated_post_id: generated_post_id.into(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// WebhookRequest
// ---------------------------------------------------------------------------

/// One request of any action, tagged on the wire by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum WebhookRequest {
    CompanyResearch(CompanyResearch),
    ScrapeReferencePost(ScrapeReferencePost),
    GenerateContent(GenerateContent),
}

impl WebhookRequest {
    pub fn action(&self) -> WebhookAction {
        match self {
            Self::CompanyResearch(_) => WebhookAction::CompanyResearch,
            Self::ScrapeReferencePost(_) => WebhookAction::ScrapeReferencePost,
            Self::GenerateContent(_) => WebhookAction::GenerateContent,
        }
    }

    /// The company or post this request is about, for log context.
    pub fn subject_id(&self) -> &str {
        match self {
            Self::CompanyResearch(p) => &p.company_id,
            Self::ScrapeReferencePost(p) => &p.company_id,
            Self::GenerateContent(p) => &p.generated_post_id,
        }
    }
}

/// Ties a payload struct to its action so handlers can be typed by payload.
pub trait ActionPayload: Serialize + DeserializeOwned + Send + Sync + 'static {
    const ACTION: WebhookAction;

    fn into_request(self) -> WebhookRequest;

    /// `None` when `request` carries a different action.
    fn from_request(request: WebhookRequest) -> Option<Self>;
}

impl ActionPayload for CompanyResearch {
    const ACTION: WebhookAction = WebhookAction::CompanyResearch;

    fn into_request(self) -> WebhookRequest {
        WebhookRequest::CompanyResearch(self)
    }

    fn from_request(request: WebhookRequest) -> Option<Self> {
        match request {
            WebhookRequest::CompanyResearch(p) => Some(p),
            _ => None,
        }
    }
}

impl ActionPayload for ScrapeReferencePost {
    const ACTION: WebhookAction = WebhookAction::ScrapeReferencePost;

    fn into_request(self) -> WebhookRequest {
        WebhookRequest::ScrapeReferencePost(self)
    }

    fn from_request(request: WebhookRequest) -> Option<Self> {
        match request {
            WebhookRequest::ScrapeReferencePost(p) => Some(p),
            _ => None,
        }
    }
}

impl ActionPayload for GenerateContent {
    const ACTION: WebhookAction = WebhookAction::GenerateContent;

    fn into_request(self) -> WebhookRequest {
        WebhookRequest::GenerateContent(self)
    }

    fn from_request(request: WebhookRequest) -> Option<Self> {
        match request {
            WebhookRequest::GenerateContent(p) => Some(p),
            _ => None,
        }
    }
}
