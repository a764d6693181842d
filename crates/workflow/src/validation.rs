//! Role-gated transition validator.
//!
//! Rules enforced, in order:
//! 1. A self-move is always allowed, even without a role.
//! 2. The edge must be in the transition table.
//! 3. A role must be present (fail closed).
//! 4. The role must be listed for the edge in the permission table.
//!
//! Nothing here touches storage, so it is safe to call speculatively when
//! working out which buttons to show.

use serde::Serialize;
use tracing::debug;

use crate::error::TransitionError;
use crate::permissions::{role_may_transition, UserRole};
use crate::status::{is_structurally_valid_edge, next_statuses, ContentStatus};

/// Allow/deny decision with an optional human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

impl From<Result<(), TransitionError>> for ValidationResult {
    fn from(result: Result<(), TransitionError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Decide whether `role` may move content from `from` to `to`.
///
/// # Errors
/// - [`TransitionError::Structural`] if the edge is not in the table.
/// - [`TransitionError::MissingRole`] if `role` is `None`.
/// - [`TransitionError::PermissionDenied`] if the role is not listed for the edge.
pub fn check_transition(
    from: ContentStatus,
    to: ContentStatus,
    role: Option<UserRole>,
) -> Result<(), TransitionError> {
    if from == to {
        return Ok(());
    }

    if !is_structurally_valid_edge(from, to) {
        return Err(TransitionError::Structural { from, to });
    }

    let role = role.ok_or(TransitionError::MissingRole { from, to })?;

    if !role_may_transition(role, from, to) {
        debug!(%role, %from, %to, "transition denied by role table");
        return Err(TransitionError::PermissionDenied { role, from, to });
    }

    Ok(())
}

/// [`check_transition`] folded into a `{ valid, reason }` result.
pub fn validate_transition(
    from: ContentStatus,
    to: ContentStatus,
    role: Option<UserRole>,
) -> ValidationResult {
    check_transition(from, to, role).into()
}

/// One-hop targets from `from` that `role` is allowed to take.
pub fn allowed_next_statuses(from: ContentStatus, role: Option<UserRole>) -> Vec<ContentStatus> {
    next_statuses(from)
        .into_iter()
        .filter(|&to| check_transition(from, to, role).is_ok())
        .collect()
}
