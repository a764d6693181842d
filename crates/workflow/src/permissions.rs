//! Roles and the edge → allowed-roles table.
//!
//! Back-to-draft edges are open to whoever could have produced the state
//! being left, which always includes `manager` and `admin`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::status::{ContentStatus, TransitionEdge};

/// Capability tag attached to the acting principal by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Reviewer,
    ContentCreator,
}

pub const ALL_ROLES: &[UserRole] = &[
    UserRole::Admin,
    UserRole::Manager,
    UserRole::Reviewer,
    UserRole::ContentCreator,
];

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Reviewer => "reviewer",
            Self::ContentCreator => "content_creator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin"           => Ok(Self::Admin),
            "manager"         => Ok(Self::Manager),
            "reviewer"        => Ok(Self::Reviewer),
            "content_creator" => Ok(Self::ContentCreator),
            other             => Err(format!("unknown user role: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Role sets
// ---------------------------------------------------------------------------

const AUTHORS: &[UserRole] = &[UserRole::ContentCreator, UserRole::Manager, UserRole::Admin];
const REVIEWERS: &[UserRole] = &[UserRole::Reviewer, UserRole::Manager, UserRole::Admin];
const PUBLISHERS: &[UserRole] = &[UserRole::Manager, UserRole::Admin];

/// One row of the permission table.
#[derive(Debug, Clone, Copy)]
pub struct EdgePermission {
    pub edge: TransitionEdge,
    pub roles: &'static [UserRole],
}

const fn rule(from: ContentStatus, to: ContentStatus, roles: &'static [UserRole]) -> EdgePermission {
    EdgePermission {
        edge: TransitionEdge::new(from, to),
        roles,
    }
}

/// Who may take each edge of the transition table.
pub const PERMISSION_TABLE: &[EdgePermission] = &[
    rule(ContentStatus::Draft, ContentStatus::Review, AUTHORS),
    rule(ContentStatus::Review, ContentStatus::Approved, REVIEWERS),
    rule(ContentStatus::Review, ContentStatus::Rejected, REVIEWERS),
    rule(ContentStatus::Review, ContentStatus::Draft, AUTHORS),
    rule(ContentStatus::Approved, ContentStatus::Scheduled, PUBLISHERS),
    rule(ContentStatus::Approved, ContentStatus::Draft, REVIEWERS),
    rule(ContentStatus::Scheduled, ContentStatus::Published, PUBLISHERS),
    rule(ContentStatus::Scheduled, ContentStatus::Draft, PUBLISHERS),
    rule(ContentStatus::Rejected, ContentStatus::Draft, REVIEWERS),
];

/// Roles allowed to take `from → to`. Empty for edges outside the table.
pub fn allowed_roles(from: ContentStatus, to: ContentStatus) -> &'static [UserRole] {
    let edge = TransitionEdge::new(from, to);
    PERMISSION_TABLE
        .iter()
        .find(|p| p.edge == edge)
        .map(|p| p.roles)
        .unwrap_or(&[])
}

/// `true` if `role` appears in the row for `from → to`.
pub fn role_may_transition(role: UserRole, from: ContentStatus, to: ContentStatus) -> bool {
    allowed_roles(from, to).contains(&role)
}
