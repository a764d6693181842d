//! Required-field preconditions for specific edges.
//!
//! `required_fields` only says *which* fields an edge needs. Checking them
//! against live data happens in `missing_fields`, with values supplied by
//! the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TransitionError;
use crate::permissions::UserRole;
use crate::status::ContentStatus;
use crate::validation::check_transition;

/// A post field that some transition depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredField {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "content")]
    Content,
    #[serde(rename = "scheduledFor")]
    ScheduledFor,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::ScheduledFor => "scheduledFor",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields `from → to` needs before it may be committed, in report order.
pub fn required_fields(from: ContentStatus, to: ContentStatus) -> Vec<RequiredField> {
    match (from, to) {
        (ContentStatus::Draft, ContentStatus::Review) => {
            vec![RequiredField::Title, RequiredField::Content]
        }
        (ContentStatus::Approved, ContentStatus::Scheduled) => vec![RequiredField::ScheduledFor],
        _ => Vec::new(),
    }
}

/// Borrowed view of the post data the preconditions look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostFields<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

impl PostFields<'_> {
    /// Blank strings count as absent.
    pub fn has(&self, field: RequiredField) -> bool {
        match field {
            RequiredField::Title => non_blank(self.title),
            RequiredField::Content => non_blank(self.content),
            RequiredField::ScheduledFor => self.scheduled_for.is_some(),
        }
    }
}

fn non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Required fields for `from → to` that `fields` does not provide.
pub fn missing_fields(
    from: ContentStatus,
    to: ContentStatus,
    fields: &PostFields<'_>,
) -> Vec<RequiredField> {
    required_fields(from, to)
        .into_iter()
        .filter(|&f| !fields.has(f))
        .collect()
}

/// Full commit gate: structure, role, then data.
///
/// # Errors
/// Anything [`check_transition`] returns, or
/// [`TransitionError::PreconditionMissing`] listing absent fields.
pub fn check_commit(
    from: ContentStatus,
    to: ContentStatus,
    role: Option<UserRole>,
    fields: &PostFields<'_>,
) -> Result<(), TransitionError> {
    check_transition(from, to, role)?;

    let missing = missing_fields(from, to, fields);
    if !missing.is_empty() {
        return Err(TransitionError::PreconditionMissing { fields: missing });
    }

    Ok(())
}
