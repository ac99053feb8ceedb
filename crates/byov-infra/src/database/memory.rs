//! In-memory document store - used when no database is configured.
//!
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use byov_core::domain::{Like, Post, Preference, User};
use byov_core::error::RepoError;
use byov_core::ports::{
    BaseRepository, LikeRepository, PostRepository, PreferenceRepository, UserRepository,
};

/// A document addressable by a string id.
pub trait Document: Clone + Send + Sync + 'static {
    fn document_id(&self) -> &str;
}

impl Document for Post {
    fn document_id(&self) -> &str {
        &self.id
    }
}

impl Document for Like {
    fn document_id(&self) -> &str {
        &self.id
    }
}

impl Document for User {
    fn document_id(&self) -> &str {
        &self.id
    }
}

impl Document for Preference {
    fn document_id(&self) -> &str {
        &self.owner
    }
}

/// One collection of documents keyed by id.
pub struct InMemoryRepository<T> {
    docs: RwLock<BTreeMap<String, T>>,
}

/// In-memory `posts` collection.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

/// In-memory `likes` collection.
pub type InMemoryLikeRepository = InMemoryRepository<Like>;

/// In-memory `users` collection.
pub type InMemoryUserRepository = InMemoryRepository<User>;

/// In-memory `preferences` collection.
pub type InMemoryPreferenceRepository = InMemoryRepository<Preference>;

impl<T: Document> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(BTreeMap::new()),
        }
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.docs
            .read()
            .await
            .values()
            .filter(|doc| predicate(doc))
            .cloned()
            .collect()
    }
}

impl<T: Document> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> BaseRepository<T, String> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: String) -> Result<Option<T>, RepoError> {
        Ok(self.docs.read().await.get(&id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        self.docs
            .write()
            .await
            .insert(entity.document_id().to_string(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        match self.docs.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_author_id(&self, author_id: &str) -> Result<Vec<Post>, RepoError> {
        Ok(self.filtered(|p| p.author_id == author_id).await)
    }

    async fn update_likes_count(&self, id: &str, likes_count: u64) -> Result<(), RepoError> {
        let mut docs = self.docs.write().await;
        let post = docs.get_mut(id).ok_or(RepoError::NotFound)?;
        post.likes_count = likes_count;
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn count_by_post_id(&self, post_id: &str) -> Result<u64, RepoError> {
        let docs = self.docs.read().await;
        Ok(docs.values().filter(|l| l.post_id == post_id).count() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let docs = self.docs.read().await;
        Ok(docs
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

impl PreferenceRepository for InMemoryPreferenceRepository {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use byov_core::services::{FeedAssembler, FeedConfig};

    use super::*;

    fn post(id: &str, likes_count: u64) -> Post {
        Post {
            id: id.to_string(),
            title: "Canopy".to_string(),
            content: "Green light".to_string(),
            author_id: "u1".to_string(),
            author_name: "Ada".to_string(),
            avatar: String::new(),
            likes_count,
            created_at: None,
            edited_at: None,
            is_private: None,
            is_draft: None,
        }
    }

    #[tokio::test]
    async fn test_update_likes_count_of_missing_post() {
        let posts = InMemoryPostRepository::new();

        let result = posts.update_likes_count("nope", 1).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_filtered_reads() {
        let likes = InMemoryLikeRepository::new();
        likes.save(Like::new("u1", "p1")).await.unwrap();
        likes.save(Like::new("u2", "p1")).await.unwrap();
        likes.save(Like::new("u1", "p2")).await.unwrap();

        assert_eq!(likes.count_by_post_id("p1").await.unwrap(), 2);
        assert_eq!(likes.count_by_post_id("p2").await.unwrap(), 1);
        assert_eq!(likes.count_by_post_id("p3").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_user_by_email_ignores_case() {
        let users = InMemoryUserRepository::new();
        let user = User::new(
            "Ada@Example.com".to_string(),
            "hash".to_string(),
            "Ada".to_string(),
            String::new(),
        );
        users.save(user.clone()).await.unwrap();

        let found = users.find_by_email("ada@example.com").await.unwrap();

        assert_eq!(found.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_feed_reconciles_against_in_memory_store() {
        let posts = Arc::new(InMemoryPostRepository::new());
        let likes = Arc::new(InMemoryLikeRepository::new());
        posts.save(post("p1", 5)).await.unwrap();
        likes.save(Like::new("u1", "p1")).await.unwrap();

        let feed = FeedAssembler::new(posts.clone(), likes.clone(), FeedConfig::default());
        let loaded = feed.load_feed().await.unwrap();

        assert_eq!(loaded[0].likes_count, 1);
        let stored = posts.find_by_id("p1".to_string()).await.unwrap().unwrap();
        assert_eq!(stored.likes_count, 1);
    }
}
