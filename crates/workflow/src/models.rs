//! Post model the workflow validates against.
//!
//! The workflow never persists these; storage lives in the `store` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::requirements::PostFields;
use crate::status::ContentStatus;

// ---------------------------------------------------------------------------
// InputType
// ---------------------------------------------------------------------------

/// Where the source material for a post came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Youtube,
    Blog,
    Memo,
}

// ---------------------------------------------------------------------------
// GeneratedPost
// ---------------------------------------------------------------------------

/// A generated LinkedIn post variant and its review/audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub content: String,
    pub input_type: Option<InputType>,
    pub input_url: Option<String>,
    pub status: ContentStatus,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_comments: Option<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GeneratedPost {
    /// Fresh draft with no audit trail.
    pub fn new(company_id: Uuid, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company_id,
            title: title.into(),
            content: content.into(),
            input_type: None,
            input_url: None,
            status: ContentStatus::Draft,
            reviewed_by: None,
            reviewed_at: None,
            review_comments: None,
            scheduled_for: None,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_input(mut self, input_type: InputType, input_url: Option<String>) -> Self {
        self.input_type = Some(input_type);
        self.input_url = input_url;
        self
    }

    pub fn fields(&self) -> PostFields<'_> {
        PostFields {
            title: Some(&self.title),
            content: Some(&self.content),
            scheduled_for: self.scheduled_for,
        }
    }
}

/// Body of a create-post request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub company_id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub input_type: Option<InputType>,
    pub input_url: Option<String>,
}

impl From<NewPost> for GeneratedPost {
    fn from(new: NewPost) -> Self {
        let mut post = GeneratedPost::new(new.company_id, new.title, new.content);
        post.input_type = new.input_type;
        post.input_url = new.input_url;
        post
    }
}

// ---------------------------------------------------------------------------
// TransitionRequest
// ---------------------------------------------------------------------------

/// A requested status change plus the data that may come with it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    pub to: ContentStatus,
    /// Who is acting; recorded as `reviewedBy` on review decisions.
    pub actor: Option<String>,
    pub comments: Option<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

impl TransitionRequest {
    pub fn to(status: ContentStatus) -> Self {
        Self {
            to: status,
            ..Default::default()
        }
    }

    pub fn by(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub fn scheduled_for(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_for = Some(at);
        self
    }
}
