//! `workflow` crate: post lifecycle states, role-gated transitions, and
//! the presentation helpers the admin UI renders from them.

pub mod status;
pub mod permissions;
pub mod validation;
pub mod requirements;
pub mod presentation;
pub mod models;
pub mod transitions;
pub mod error;

pub use status::{
    ContentStatus, TransitionEdge, TRANSITION_TABLE, is_structurally_valid_edge, is_terminal,
    next_statuses,
};
pub use permissions::{UserRole, allowed_roles, role_may_transition};
pub use validation::{ValidationResult, allowed_next_statuses, check_transition, validate_transition};
pub use requirements::{PostFields, RequiredField, check_commit, missing_fields, required_fields};
pub use presentation::{Emphasis, TransitionAction, available_actions, emphasis_for, label_for};
pub use models::{GeneratedPost, InputType, NewPost, TransitionRequest};
pub use transitions::apply_transition;
pub use error::TransitionError;
