//! Workflow-level error types.

use thiserror::Error;

use crate::permissions::UserRole;
use crate::requirements::RequiredField;
use crate::status::ContentStatus;

/// Why a status change was refused.
///
/// These are returned as values so callers can render them; none of them
/// should ever reach a panic or an unwinding error path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    // ------ Structural ------

    /// The edge is not in the transition table.
    #[error("invalid transition from {from} to {to}")]
    Structural {
        from: ContentStatus,
        to: ContentStatus,
    },

    // ------ Authorization ------

    /// No role was supplied; every real move is denied.
    #[error("a role is required to move content from {from} to {to}")]
    MissingRole {
        from: ContentStatus,
        to: ContentStatus,
    },

    /// The edge exists but this role may not take it.
    #[error("role '{role}' is not permitted to move content from {from} to {to}")]
    PermissionDenied {
        role: UserRole,
        from: ContentStatus,
        to: ContentStatus,
    },

    // ------ Preconditions ------

    /// Edge and role are fine but the post is missing data.
    #[error("missing required fields: {}", join_fields(.fields))]
    PreconditionMissing { fields: Vec<RequiredField> },
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl TransitionError {
    /// Stable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Structural { .. } => "INVALID_TRANSITION",
            Self::MissingRole { .. } => "ROLE_REQUIRED",
            Self::PermissionDenied { .. } => "PERMISSION_DENIED",
            Self::PreconditionMissing { .. } => "PRECONDITION_MISSING",
        }
    }

    /// Only missing data can be fixed by the same caller and retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::PreconditionMissing { .. })
    }

    /// Field names the caller must supply, if any.
    pub fn missing_fields(&self) -> Option<&[RequiredField]> {
        match self {
            Self::PreconditionMissing { fields } => Some(fields),
            _ => None,
        }
    }
}
