//! In-process store with failure switches for service tests.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{Like, Post, Preference, User};
use crate::error::RepoError;
use crate::ports::{
    BaseRepository, LikeRepository, PostRepository, PreferenceRepository, UserRepository,
};

#[derive(Default)]
pub(crate) struct FakeStore {
    posts: Mutex<BTreeMap<String, Post>>,
    likes: Mutex<BTreeMap<String, Like>>,
    users: Mutex<BTreeMap<String, User>>,
    preferences: Mutex<BTreeMap<String, Preference>>,
    fail_find_all: AtomicBool,
    fail_count: Mutex<HashSet<String>>,
    fail_update: Mutex<HashSet<String>>,
    updates: AtomicUsize,
}

impl FakeStore {
    pub(crate) fn with_posts(posts: Vec<Post>) -> Self {
        let store = Self::default();
        {
            let mut map = store.posts.lock().unwrap();
            for post in posts {
                map.insert(post.id.clone(), post);
            }
        }
        store
    }

    pub(crate) fn add_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id.clone(), user);
    }

    /// Add `n` likes from distinct users.
    pub(crate) fn add_likes(&self, post_id: &str, n: usize) {
        let mut likes = self.likes.lock().unwrap();
        for i in 0..n {
            let like = Like::new(&format!("fan-{i}"), post_id);
            likes.insert(like.id.clone(), like);
        }
    }

    pub(crate) fn fail_find_all(&self) {
        self.fail_find_all.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_count_for(&self, post_id: &str) {
        self.fail_count.lock().unwrap().insert(post_id.to_string());
    }

    pub(crate) fn fail_update_for(&self, post_id: &str) {
        self.fail_update.lock().unwrap().insert(post_id.to_string());
    }

    pub(crate) fn stored_post(&self, id: &str) -> Option<Post> {
        self.posts.lock().unwrap().get(id).cloned()
    }

    pub(crate) fn stored_likes_count(&self, id: &str) -> Option<u64> {
        self.stored_post(id).map(|p| p.likes_count)
    }

    pub(crate) fn like_rows(&self, post_id: &str) -> usize {
        self.likes
            .lock()
            .unwrap()
            .values()
            .filter(|l| l.post_id == post_id)
            .count()
    }

    pub(crate) fn stored_theme(&self, owner: &str) -> Option<String> {
        self.preferences
            .lock()
            .unwrap()
            .get(owner)
            .map(|p| p.theme.clone())
    }

    pub(crate) fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseRepository<Post, String> for FakeStore {
    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        Ok(self.stored_post(&id))
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.posts
            .lock()
            .unwrap()
            .insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        self.posts
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for FakeStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        if self.fail_find_all.load(Ordering::SeqCst) {
            return Err(RepoError::Connection("store unavailable".to_string()));
        }
        Ok(self.posts.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_author_id(&self, author_id: &str) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn update_likes_count(&self, id: &str, likes_count: u64) -> Result<(), RepoError> {
        if self.fail_update.lock().unwrap().contains(id) {
            return Err(RepoError::PermissionDenied(format!("posts/{id}")));
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut posts = self.posts.lock().unwrap();
        let post = posts.get_mut(id).ok_or(RepoError::NotFound)?;
        post.likes_count = likes_count;
        Ok(())
    }
}

#[async_trait]
impl BaseRepository<Like, String> for FakeStore {
    async fn find_by_id(&self, id: String) -> Result<Option<Like>, RepoError> {
        Ok(self.likes.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, like: Like) -> Result<Like, RepoError> {
        self.likes
            .lock()
            .unwrap()
            .insert(like.id.clone(), like.clone());
        Ok(like)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        self.likes
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl LikeRepository for FakeStore {
    async fn count_by_post_id(&self, post_id: &str) -> Result<u64, RepoError> {
        if self.fail_count.lock().unwrap().contains(post_id) {
            return Err(RepoError::PermissionDenied(format!("likes?postId={post_id}")));
        }
        Ok(self.like_rows(post_id) as u64)
    }
}

#[async_trait]
impl BaseRepository<User, String> for FakeStore {
    async fn find_by_id(&self, id: String) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        self.add_user(user.clone());
        Ok(user)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        self.users.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Preference, String> for FakeStore {
    async fn find_by_id(&self, owner: String) -> Result<Option<Preference>, RepoError> {
        Ok(self.preferences.lock().unwrap().get(&owner).cloned())
    }

    async fn save(&self, pref: Preference) -> Result<Preference, RepoError> {
        self.preferences
            .lock()
            .unwrap()
            .insert(pref.owner.clone(), pref.clone());
        Ok(pref)
    }

    async fn delete(&self, owner: String) -> Result<(), RepoError> {
        self.preferences.lock().unwrap().remove(&owner);
        Ok(())
    }
}

impl PreferenceRepository for FakeStore {}
