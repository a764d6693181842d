//! Content lifecycle states and the structural transition table.
//!
//! The table below is the single source of truth for whether a move between
//! two states is possible at all, independent of who asks for it.
//!
//! ```text
//! draft ──► review ──► approved ──► scheduled ──► published
//!   ▲         │  │        │            │
//!   │         │  └──► rejected         │
//!   └─────────┴─────────┴──────────────┘   (every non-terminal state can go back to draft)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ContentStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a generated post variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    #[default]
    Draft,
    Review,
    Approved,
    Scheduled,
    Published,
    Rejected,
}

/// Every status, in lifecycle order.
pub const ALL_STATUSES: &[ContentStatus] = &[
    ContentStatus::Draft,
    ContentStatus::Review,
    ContentStatus::Approved,
    ContentStatus::Scheduled,
    ContentStatus::Published,
    ContentStatus::Rejected,
];

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Approved => "approved",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft"     => Ok(Self::Draft),
            "review"    => Ok(Self::Review),
            "approved"  => Ok(Self::Approved),
            "scheduled" => Ok(Self::Scheduled),
            "published" => Ok(Self::Published),
            "rejected"  => Ok(Self::Rejected),
            other       => Err(format!("unknown content status: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// TransitionEdge
// ---------------------------------------------------------------------------

/// Directed move from one status to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub from: ContentStatus,
    pub to: ContentStatus,
}

impl TransitionEdge {
    pub const fn new(from: ContentStatus, to: ContentStatus) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for TransitionEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// All structurally valid edges (self-moves excluded).
pub const TRANSITION_TABLE: &[TransitionEdge] = &[
    TransitionEdge::new(ContentStatus::Draft, ContentStatus::Review),
    TransitionEdge::new(ContentStatus::Review, ContentStatus::Approved),
    TransitionEdge::new(ContentStatus::Review, ContentStatus::Rejected),
    TransitionEdge::new(ContentStatus::Review, ContentStatus::Draft),
    TransitionEdge::new(ContentStatus::Approved, ContentStatus::Scheduled),
    TransitionEdge::new(ContentStatus::Approved, ContentStatus::Draft),
    TransitionEdge::new(ContentStatus::Scheduled, ContentStatus::Published),
    TransitionEdge::new(ContentStatus::Scheduled, ContentStatus::Draft),
    TransitionEdge::new(ContentStatus::Rejected, ContentStatus::Draft),
];

/// `true` if `from == to` or the edge is listed in [`TRANSITION_TABLE`].
pub fn is_structurally_valid_edge(from: ContentStatus, to: ContentStatus) -> bool {
    from == to || TRANSITION_TABLE.contains(&TransitionEdge::new(from, to))
}

/// Statuses reachable from `from` in one hop, in table order. Never includes `from`.
pub fn next_statuses(from: ContentStatus) -> Vec<ContentStatus> {
    TRANSITION_TABLE
        .iter()
        .filter(|edge| edge.from == from)
        .map(|edge| edge.to)
        .collect()
}

/// `published` is the only status with no way out.
pub fn is_terminal(status: ContentStatus) -> bool {
    next_statuses(status).is_empty()
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_edges_are_always_valid() {
        for &s in ALL_STATUSES {
            assert!(is_structurally_valid_edge(s, s), "{s} → {s} should be valid");
        }
    }

    #[test]
    fn only_table_edges_are_valid() {
        for &from in ALL_STATUSES {
            for &to in ALL_STATUSES {
                if from == to {
                    continue;
                }
                let listed = TRANSITION_TABLE.contains(&TransitionEdge::new(from, to));
                assert_eq!(is_structurally_valid_edge(from, to), listed, "{from} → {to}");
            }
        }
    }

    #[test]
    fn table_has_nine_edges() {
        assert_eq!(TRANSITION_TABLE.len(), 9);
    }

    #[test]
    fn published_is_terminal() {
        assert!(next_statuses(ContentStatus::Published).is_empty());
        assert!(is_terminal(ContentStatus::Published));
        for &s in ALL_STATUSES {
            if s != ContentStatus::Published {
                assert!(!is_terminal(s), "{s} should not be terminal");
            }
        }
    }

    #[test]
    fn rejected_only_goes_back_to_draft() {
        assert_eq!(next_statuses(ContentStatus::Rejected), vec![ContentStatus::Draft]);
    }

    #[test]
    fn review_fans_out_three_ways() {
        assert_eq!(
            next_statuses(ContentStatus::Review),
            vec![ContentStatus::Approved, ContentStatus::Rejected, ContentStatus::Draft]
        );
    }

    #[test]
    fn skipping_ahead_is_rejected() {
        assert!(!is_structurally_valid_edge(ContentStatus::Draft, ContentStatus::Published));
        assert!(!is_structurally_valid_edge(ContentStatus::Draft, ContentStatus::Approved));
        assert!(!is_structurally_valid_edge(ContentStatus::Published, ContentStatus::Draft));
        assert!(!is_structurally_valid_edge(ContentStatus::Rejected, ContentStatus::Review));
    }

    #[test]
    fn status_parses_and_displays() {
        for &s in ALL_STATUSES {
            assert_eq!(s.to_string().parse::<ContentStatus>().unwrap(), s);
        }
        assert!("archived".parse::<ContentStatus>().is_err());
        assert_eq!(
            serde_json::to_value(ContentStatus::Scheduled).unwrap(),
            serde_json::json!("scheduled")
        );
    }
}
