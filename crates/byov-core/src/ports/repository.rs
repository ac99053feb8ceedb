use async_trait::async_trait;

use crate::domain::{Like, Post, Preference, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, String> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// The `posts` collection.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, String> {
    /// Read the whole collection.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_author_id(&self, author_id: &str) -> Result<Vec<Post>, RepoError>;

    /// Overwrite the cached like count of one post.
    async fn update_likes_count(&self, id: &str, likes_count: u64) -> Result<(), RepoError>;
}

/// The `likes` collection.
#[async_trait]
pub trait LikeRepository: BaseRepository<Like, String> {
    /// Number of likes whose `post_id` matches.
    async fn count_by_post_id(&self, post_id: &str) -> Result<u64, RepoError>;
}

/// The `preferences` collection, keyed by owner.
pub trait PreferenceRepository: BaseRepository<Preference, String> {}
