//! Applying a validated status change to a post.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::TransitionError;
use crate::models::{GeneratedPost, TransitionRequest};
use crate::permissions::UserRole;
use crate::requirements::{check_commit, PostFields};
use crate::status::ContentStatus;

/// Validate `request` against `post` and return the updated post.
///
/// The input is never mutated. On success the returned post carries the new
/// status, `updated_at = now`, and the audit fields for the edge taken:
/// - approve or reject: `reviewed_at`, plus `reviewed_by` and `review_comments`
///   when the request carries them;
/// - entering `scheduled`: `scheduled_for` from the request, else the post's own;
/// - entering `published`: `published_at`;
/// - `scheduled → draft`: `scheduled_for` is cleared.
///
/// # Errors
/// Whatever [`check_commit`] reports, evaluated with the request's
/// `scheduled_for` layered over the post's.
pub fn apply_transition(
    post: &GeneratedPost,
    request: &TransitionRequest,
    role: Option<UserRole>,
    now: DateTime<Utc>,
) -> Result<GeneratedPost, TransitionError> {
    let from = post.status;
    let to = request.to;

    if from == to {
        return Ok(post.clone());
    }

    let fields = PostFields {
        scheduled_for: request.scheduled_for.or(post.scheduled_for),
        ..post.fields()
    };
    check_commit(from, to, role, &fields)?;

    let mut next = post.clone();
    next.status = to;
    next.updated_at = now;

    if is_review_decision(from, to) {
        if let Some(actor) = &request.actor {
            next.reviewed_by = Some(actor.clone());
        }
        next.reviewed_at = Some(now);
        if request.comments.is_some() {
            next.review_comments = request.comments.clone();
        }
    }

    match (from, to) {
        (_, ContentStatus::Scheduled) => next.scheduled_for = fields.scheduled_for,
        (_, ContentStatus::Published) => next.published_at = Some(now),
        (ContentStatus::Scheduled, ContentStatus::Draft) => next.scheduled_for = None,
        _ => {}
    }

    info!(post_id = %post.id, %from, %to, "post status changed");
    Ok(next)
}

/// Approve and reject are the only moves that count as a review.
fn is_review_decision(from: ContentStatus, to: ContentStatus) -> bool {
    from == ContentStatus::Review
        && matches!(to, ContentStatus::Approved | ContentStatus::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    use crate::requirements::RequiredField;

    fn make_post(status: ContentStatus) -> GeneratedPost {
        let mut post = GeneratedPost::new(Uuid::new_v4(), "Q3 recap", "Three things we learned.");
        post.status = status;
        post
    }

    #[test]
    fn submit_for_review() {
        let post = make_post(ContentStatus::Draft);
        let now = Utc::now();
        let next = apply_transition(
            &post,
            &TransitionRequest::to(ContentStatus::Review),
            Some(UserRole::ContentCreator),
            now,
        )
        .expect("creator can submit");
        assert_eq!(next.status, ContentStatus::Review);
        assert_eq!(next.updated_at, now);
        assert!(next.reviewed_by.is_none());
    }

    #[test]
    fn approval_records_reviewer() {
        let post = make_post(ContentStatus::Review);
        let now = Utc::now();
        let request = TransitionRequest::to(ContentStatus::Approved)
            .by("rita@example.com")
            .with_comments("Good hook");
        let next = apply_transition(&post, &request, Some(UserRole::Reviewer), now).unwrap();

        assert_eq!(next.status, ContentStatus::Approved);
        assert_eq!(next.reviewed_by.as_deref(), Some("rita@example.com"));
        assert_eq!(next.reviewed_at, Some(now));
        assert_eq!(next.review_comments.as_deref(), Some("Good hook"));
    }

    #[test]
    fn withdrawing_from_review_is_not_a_review() {
        let mut post = make_post(ContentStatus::Review);
        post.reviewed_by = Some("rev_9".into());
        let earlier = Utc::now() - Duration::hours(1);
        post.reviewed_at = Some(earlier);

        let next = apply_transition(
            &post,
            &TransitionRequest::to(ContentStatus::Draft),
            Some(UserRole::ContentCreator),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(next.status, ContentStatus::Draft);
        assert_eq!(next.reviewed_by.as_deref(), Some("rev_9"));
        assert_eq!(next.reviewed_at, Some(earlier));
    }

    #[test]
    fn decision_without_actor_keeps_previous_reviewer() {
        let mut post = make_post(ContentStatus::Review);
        post.reviewed_by = Some("rev_9".into());
        let now = Utc::now();

        let next = apply_transition(
            &post,
            &TransitionRequest::to(ContentStatus::Rejected),
            Some(UserRole::Manager),
            now,
        )
        .unwrap();

        assert_eq!(next.reviewed_by.as_deref(), Some("rev_9"));
        assert_eq!(next.reviewed_at, Some(now));
    }

    #[test]
    fn schedule_takes_date_from_request() {
        let post = make_post(ContentStatus::Approved);
        let when = Utc::now() + Duration::days(2);
        let request = TransitionRequest::to(ContentStatus::Scheduled).scheduled_for(when);
        let next = apply_transition(&post, &request, Some(UserRole::Manager), Utc::now()).unwrap();
        assert_eq!(next.scheduled_for, Some(when));
    }

    #[test]
    fn schedule_without_date_is_a_precondition_failure() {
        let post = make_post(ContentStatus::Approved);
        let err = apply_transition(
            &post,
            &TransitionRequest::to(ContentStatus::Scheduled),
            Some(UserRole::Admin),
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TransitionError::PreconditionMissing {
                fields: vec![RequiredField::ScheduledFor]
            }
        );
    }

    #[test]
    fn publish_stamps_published_at() {
        let mut post = make_post(ContentStatus::Scheduled);
        post.scheduled_for = Some(Utc::now());
        let now = Utc::now();
        let next = apply_transition(
            &post,
            &TransitionRequest::to(ContentStatus::Published),
            Some(UserRole::Manager),
            now,
        )
        .unwrap();
        assert_eq!(next.published_at, Some(now));
    }

    #[test]
    fn unscheduling_clears_the_date() {
        let mut post = make_post(ContentStatus::Scheduled);
        post.scheduled_for = Some(Utc::now());
        let next = apply_transition(
            &post,
            &TransitionRequest::to(ContentStatus::Draft),
            Some(UserRole::Admin),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(next.status, ContentStatus::Draft);
        assert!(next.scheduled_for.is_none());
    }

    #[test]
    fn self_move_returns_unchanged_copy() {
        let post = make_post(ContentStatus::Published);
        let next = apply_transition(
            &post,
            &TransitionRequest::to(ContentStatus::Published),
            None,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(next, post);
    }

    #[test]
    fn denied_transition_does_not_touch_input() {
        let post = make_post(ContentStatus::Review);
        let original = post.clone();
        let result = apply_transition(
            &post,
            &TransitionRequest::to(ContentStatus::Approved),
            Some(UserRole::ContentCreator),
            Utc::now(),
        );
        assert!(matches!(result, Err(TransitionError::PermissionDenied { .. })));
        assert_eq!(post, original);
    }
}
