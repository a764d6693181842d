//! The persistence seam the API writes posts through.
//!
//! Implementations own per-post write ordering: `update` must refuse a write
//! whose `expected_updated_at` no longer matches the stored row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use workflow::{ContentStatus, GeneratedPost};

use crate::StoreError;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Store a new post. Fails if the id is taken.
    async fn insert(&self, post: GeneratedPost) -> Result<GeneratedPost, StoreError>;

    async fn get(&self, id: Uuid) -> Result<GeneratedPost, StoreError>;

    /// Newest first, optionally only one status.
    async fn list(&self, status: Option<ContentStatus>) -> Result<Vec<GeneratedPost>, StoreError>;

    /// Replace the stored post if it still has `expected_updated_at`.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] if there is no such post.
    /// - [`StoreError::Conflict`] if someone else wrote it first.
    async fn update(
        &self,
        post: GeneratedPost,
        expected_updated_at: DateTime<Utc>,
    ) -> Result<GeneratedPost, StoreError>;
}
