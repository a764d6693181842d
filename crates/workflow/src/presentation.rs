//! Button labels and emphasis for transitions.
//!
//! The label table must cover every edge of the transition table; the
//! generic fallback exists only for edges outside it.

use std::borrow::Cow;

use serde::Serialize;

use crate::permissions::UserRole;
use crate::status::{ContentStatus, TransitionEdge};
use crate::validation::allowed_next_statuses;

/// Visual weight of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Primary,
    Success,
    Danger,
    Secondary,
}

const LABELS: &[(TransitionEdge, &str)] = &[
    (TransitionEdge::new(ContentStatus::Draft, ContentStatus::Review), "Submit for Review"),
    (TransitionEdge::new(ContentStatus::Review, ContentStatus::Approved), "Approve"),
    (TransitionEdge::new(ContentStatus::Review, ContentStatus::Rejected), "Reject"),
    (TransitionEdge::new(ContentStatus::Review, ContentStatus::Draft), "Return to Draft"),
    (TransitionEdge::new(ContentStatus::Approved, ContentStatus::Scheduled), "Schedule"),
    (TransitionEdge::new(ContentStatus::Approved, ContentStatus::Draft), "Back to Draft"),
    (TransitionEdge::new(ContentStatus::Scheduled, ContentStatus::Published), "Publish Now"),
    (TransitionEdge::new(ContentStatus::Scheduled, ContentStatus::Draft), "Unschedule"),
    (TransitionEdge::new(ContentStatus::Rejected, ContentStatus::Draft), "Revise as Draft"),
];

fn explicit_label(from: ContentStatus, to: ContentStatus) -> Option<&'static str> {
    let edge = TransitionEdge::new(from, to);
    LABELS.iter().find(|(e, _)| *e == edge).map(|(_, label)| *label)
}

/// Display label for `from → to`.
pub fn label_for(from: ContentStatus, to: ContentStatus) -> Cow<'static, str> {
    match explicit_label(from, to) {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(format!("Change status to {to}")),
    }
}

/// `false` means `label_for` would use the generic fallback.
pub fn is_explicitly_labeled(from: ContentStatus, to: ContentStatus) -> bool {
    explicit_label(from, to).is_some()
}

/// Depends only on the destination.
pub fn emphasis_for(to: ContentStatus) -> Emphasis {
    match to {
        ContentStatus::Approved => Emphasis::Success,
        ContentStatus::Rejected => Emphasis::Danger,
        ContentStatus::Review | ContentStatus::Scheduled => Emphasis::Primary,
        ContentStatus::Draft | ContentStatus::Published => Emphasis::Secondary,
    }
}

/// What the UI renders for one available move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionAction {
    pub to: ContentStatus,
    pub label: Cow<'static, str>,
    pub emphasis: Emphasis,
}

/// Actions `role` can take from `from`, in transition-table order.
pub fn available_actions(from: ContentStatus, role: Option<UserRole>) -> Vec<TransitionAction> {
    allowed_next_statuses(from, role)
        .into_iter()
        .map(|to| TransitionAction {
            to,
            label: label_for(from, to),
            emphasis: emphasis_for(to),
        })
        .collect()
}
