//! Feed assembly and like-count reconciliation.
//!
//! The public feed is every post passing [`Post::is_public`], newest first.
//! Reconciliation rewrites a post's cached `likes_count` whenever it disagrees
//! with the number of like documents referencing the post. It is best-effort:
//! a failure for one post is logged and that post keeps its stored count.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::{LikeRepository, PostRepository};

/// Shown in place of the posts when the collection cannot be read.
pub const LOAD_FAILED: &str = "Could not load verses";

/// Feed assembly settings.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Reconcile like counts as part of every feed load.
    pub reconcile_on_read: bool,
    /// Maximum number of posts reconciled at once.
    pub reconcile_concurrency: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            reconcile_on_read: true,
            reconcile_concurrency: 16,
        }
    }
}

/// What a reconciliation pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub scanned: usize,
    pub corrected: usize,
    pub failed: usize,
}

/// Feed as seen by the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedState {
    pub loading: bool,
    pub posts: Vec<Post>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FeedState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            posts: Vec::new(),
            error: None,
        }
    }

    pub fn ready(posts: Vec<Post>) -> Self {
        Self {
            loading: false,
            posts,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            loading: false,
            posts: Vec::new(),
            error: Some(error.into()),
        }
    }
}

enum Outcome {
    Unchanged,
    Corrected,
    Failed,
}

/// Builds the public feed from the `posts` and `likes` collections.
pub struct FeedAssembler {
    posts: Arc<dyn PostRepository>,
    likes: Arc<dyn LikeRepository>,
    config: FeedConfig,
}

impl FeedAssembler {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        likes: Arc<dyn LikeRepository>,
        config: FeedConfig,
    ) -> Self {
        Self {
            posts,
            likes,
            config,
        }
    }

    /// Load the public feed.
    ///
    /// Fails only when the posts collection cannot be read.
    pub async fn load_feed(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.find_all().await?;

        let posts = if self.config.reconcile_on_read {
            self.reconcile_posts(posts).await.0
        } else {
            posts
        };

        Ok(public_feed(posts))
    }

    /// Load the feed into a state that is always displayable.
    ///
    /// The state carries [`LOAD_FAILED`] rather than the store error, which
    /// only goes to the log.
    pub async fn load_state(&self) -> FeedState {
        match self.load_feed().await {
            Ok(posts) => FeedState::ready(posts),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching posts");
                FeedState::failed(LOAD_FAILED)
            }
        }
    }

    /// Reconcile every stored post without building a feed.
    pub async fn reconcile(&self) -> Result<ReconcileReport, RepoError> {
        let posts = self.posts.find_all().await?;
        let (_, report) = self.reconcile_posts(posts).await;

        tracing::info!(
            scanned = report.scanned,
            corrected = report.corrected,
            failed = report.failed,
            "Like counts reconciled"
        );
        Ok(report)
    }

    async fn reconcile_posts(&self, posts: Vec<Post>) -> (Vec<Post>, ReconcileReport) {
        let posts_repo = self.posts.as_ref();
        let likes_repo = self.likes.as_ref();

        let results: Vec<(Post, Outcome)> = stream::iter(posts)
            .map(|mut post| async move {
                let outcome = match reconcile_post(posts_repo, likes_repo, &mut post).await {
                    Ok(true) => Outcome::Corrected,
                    Ok(false) => Outcome::Unchanged,
                    Err(e) => {
                        tracing::warn!(post_id = %post.id, error = %e, "Error reconciling likes for post");
                        Outcome::Failed
                    }
                };
                (post, outcome)
            })
            .buffered(self.config.reconcile_concurrency.max(1))
            .collect()
            .await;

        let mut report = ReconcileReport::default();
        let mut posts = Vec::with_capacity(results.len());
        for (post, outcome) in results {
            report.scanned += 1;
            match outcome {
                Outcome::Corrected => report.corrected += 1,
                Outcome::Failed => report.failed += 1,
                Outcome::Unchanged => {}
            }
            posts.push(post);
        }

        (posts, report)
    }
}

/// Bring one post's `likes_count` in line with its likes.
///
/// Returns whether a correction was written. `post` is only updated once the
/// write has succeeded.
pub async fn reconcile_post(
    posts: &dyn PostRepository,
    likes: &dyn LikeRepository,
    post: &mut Post,
) -> Result<bool, RepoError> {
    let actual = likes.count_by_post_id(&post.id).await?;
    if actual == post.likes_count {
        return Ok(false);
    }

    posts.update_likes_count(&post.id, actual).await?;
    tracing::debug!(
        post_id = %post.id,
        stored = post.likes_count,
        actual,
        "Corrected likes count"
    );
    post.likes_count = actual;
    Ok(true)
}

/// Keep public posts and order them newest first.
pub fn public_feed(posts: impl IntoIterator<Item = Post>) -> Vec<Post> {
    let mut feed: Vec<Post> = posts.into_iter().filter(Post::is_public).collect();
    sort_by_recency(&mut feed);
    feed
}

/// Stable sort, newest first. Posts without a timestamp count as the epoch.
pub fn sort_by_recency(posts: &mut [Post]) {
    posts.sort_by(|a, b| recency_key(b).cmp(&recency_key(a)));
}

fn recency_key(post: &Post) -> DateTime<Utc> {
    post.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
