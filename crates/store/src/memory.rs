//! In-process `PostStore` backed by a `RwLock<HashMap>`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use workflow::{ContentStatus, GeneratedPost};

use crate::{PostStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<HashMap<Uuid, GeneratedPost>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert(&self, post: GeneratedPost) -> Result<GeneratedPost, StoreError> {
        let mut posts = self.posts.write().await;
        if posts.contains_key(&post.id) {
            return Err(StoreError::AlreadyExists(post.id));
        }
        debug!(post_id = %post.id, "inserted post");
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn get(&self, id: Uuid) -> Result<GeneratedPost, StoreError> {
        self.posts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, status: Option<ContentStatus>) -> Result<Vec<GeneratedPost>, StoreError> {
        let posts = self.posts.read().await;
        let mut rows: Vec<GeneratedPost> = posts
            .values()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update(
        &self,
        post: GeneratedPost,
        expected_updated_at: DateTime<Utc>,
    ) -> Result<GeneratedPost, StoreError> {
        let mut posts = self.posts.write().await;
        let current = posts.get(&post.id).ok_or(StoreError::NotFound(post.id))?;

        if current.updated_at != expected_updated_at {
            warn!(post_id = %post.id, "rejected stale post update");
            return Err(StoreError::Conflict(post.id));
        }

        posts.insert(post.id, post.clone());
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> GeneratedPost {
        GeneratedPost::new(Uuid::new_v4(), "title", "content")
    }

    #[tokio::test]
    async fn insert_then_get() {
        let store = MemoryStore::new();
        let post = store.insert(sample()).await.unwrap();
        assert_eq!(store.get(post.id).await.unwrap(), post);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = MemoryStore::new();
        let post = store.insert(sample()).await.unwrap();
        assert_eq!(
            store.insert(post.clone()).await,
            Err(StoreError::AlreadyExists(post.id))
        );
    }

    #[tokio::test]
    async fn missing_post_is_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(MemoryStore::new().get(id).await, Err(StoreError::NotFound(id)));
    }

    #[tokio::test]
    async fn list_filters_by_status_newest_first() {
        let store = MemoryStore::new();
        let mut older = sample();
        older.created_at -= Duration::minutes(5);
        let newer = sample();
        let mut in_review = sample();
        in_review.status = ContentStatus::Review;

        store.insert(older.clone()).await.unwrap();
        store.insert(newer.clone()).await.unwrap();
        store.insert(in_review.clone()).await.unwrap();

        let drafts = store.list(Some(ContentStatus::Draft)).await.unwrap();
        assert_eq!(drafts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![newer.id, older.id]);
        assert_eq!(store.list(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn stale_update_conflicts() {
        let store = MemoryStore::new();
        let post = store.insert(sample()).await.unwrap();
        let read_at = post.updated_at;

        let mut first = post.clone();
        first.status = ContentStatus::Review;
        first.updated_at = read_at + Duration::seconds(1);
        store.update(first, read_at).await.unwrap();

        let mut second = post.clone();
        second.title = "late".into();
        assert_eq!(store.update(second, read_at).await, Err(StoreError::Conflict(post.id)));
        assert_eq!(store.get(post.id).await.unwrap().status, ContentStatus::Review);
    }
}
