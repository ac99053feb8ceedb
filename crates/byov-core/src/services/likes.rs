//! Liking and unliking verses.

use std::sync::Arc;

use serde::Serialize;

use super::feed::reconcile_post;
use crate::domain::{Like, Post};
use crate::error::{DomainError, RepoError};
use crate::ports::{LikeRepository, PostRepository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub post_id: String,
    pub liked: bool,
    pub likes_count: u64,
}

pub struct LikeService {
    posts: Arc<dyn PostRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl LikeService {
    pub fn new(posts: Arc<dyn PostRepository>, likes: Arc<dyn LikeRepository>) -> Self {
        Self { posts, likes }
    }

    /// Like a post. Liking twice is a no-op.
    pub async fn like(&self, user_uid: &str, post_id: &str) -> Result<LikeStatus, DomainError> {
        let mut post = self.visible_post(user_uid, post_id).await?;

        let key = Like::key(user_uid, post_id);
        if self.likes.find_by_id(key).await?.is_none() {
            self.likes.save(Like::new(user_uid, post_id)).await?;
        }

        self.recount(&mut post).await;
        Ok(LikeStatus {
            post_id: post.id,
            liked: true,
            likes_count: post.likes_count,
        })
    }

    /// Remove a like. Unliking a post that was not liked is a no-op.
    pub async fn unlike(&self, user_uid: &str, post_id: &str) -> Result<LikeStatus, DomainError> {
        let mut post = self.visible_post(user_uid, post_id).await?;

        match self.likes.delete(Like::key(user_uid, post_id)).await {
            Ok(()) | Err(RepoError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        self.recount(&mut post).await;
        Ok(LikeStatus {
            post_id: post.id,
            liked: false,
            likes_count: post.likes_count,
        })
    }

    async fn visible_post(&self, user_uid: &str, post_id: &str) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(post_id.to_string())
            .await?
            .filter(|p| p.is_visible_to(Some(user_uid)))
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Post",
                id: post_id.to_string(),
            })
    }

    /// The like is already stored; a failed recount is left for the next
    /// reconciliation pass.
    async fn recount(&self, post: &mut Post) {
        if let Err(e) = reconcile_post(self.posts.as_ref(), self.likes.as_ref(), post).await {
            tracing::warn!(post_id = %post.id, error = %e, "Error reconciling likes for post");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post_fixture;
    use crate::services::testing::FakeStore;

    fn setup() -> (Arc<FakeStore>, LikeService) {
        let store = Arc::new(FakeStore::with_posts(vec![post_fixture("p")]));
        let service = LikeService::new(store.clone(), store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn test_like_updates_count() {
        let (store, likes) = setup();

        let status = likes.like("u1", "p").await.unwrap();
        likes.like("u2", "p").await.unwrap();

        assert!(status.liked);
        assert_eq!(status.likes_count, 1);
        assert_eq!(store.stored_likes_count("p"), Some(2));
    }

    #[tokio::test]
    async fn test_like_twice_counts_once() {
        let (store, likes) = setup();

        likes.like("u1", "p").await.unwrap();
        let status = likes.like("u1", "p").await.unwrap();

        assert_eq!(status.likes_count, 1);
        assert_eq!(store.like_rows("p"), 1);
    }

    #[tokio::test]
    async fn test_unlike_without_like_is_noop() {
        let (store, likes) = setup();
        likes.like("u1", "p").await.unwrap();

        likes.unlike("u2", "p").await.unwrap();
        let status = likes.unlike("u1", "p").await.unwrap();

        assert!(!status.liked);
        assert_eq!(status.likes_count, 0);
        assert_eq!(store.stored_likes_count("p"), Some(0));
    }

    #[tokio::test]
    async fn test_cannot_like_hidden_post() {
        let mut post = post_fixture("hidden");
        post.is_draft = Some(true);
        let store = Arc::new(FakeStore::with_posts(vec![post]));
        let likes = LikeService::new(store.clone(), store.clone());

        assert!(matches!(
            likes.like("u1", "hidden").await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(likes.like("author-1", "hidden").await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_recount_still_records_like() {
        let (store, likes) = setup();
        store.fail_count_for("p");

        let status = likes.like("u1", "p").await.unwrap();

        assert_eq!(status.likes_count, 0);
        assert_eq!(store.like_rows("p"), 1);
    }
}
