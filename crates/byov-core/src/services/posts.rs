//! Writing, reading and listing verses.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::feed::{public_feed, sort_by_recency};
use crate::domain::{Post, Visibility};
use crate::error::DomainError;
use crate::ports::{PostRepository, UserRepository};

#[derive(Debug, Clone, Deserialize)]
pub struct NewVerse {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub visibility: Option<Visibility>,
}

/// An author found by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub uid: String,
    pub name: String,
    pub avatar: String,
    pub public_verses: usize,
}

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Write a new verse, copying the author's current name and avatar.
    pub async fn create(&self, author_uid: &str, verse: NewVerse) -> Result<Post, DomainError> {
        validate_text("title", &verse.title)?;
        validate_text("content", &verse.content)?;

        let author = self
            .users
            .find_by_id(author_uid.to_string())
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let post = Post::new(
            &author,
            verse.title.trim().to_string(),
            verse.content,
            verse.visibility,
        );
        let saved = self.posts.save(post).await?;
        tracing::info!(post_id = %saved.id, author_id = %saved.author_id, "Verse created");
        Ok(saved)
    }

    /// Open one post. Non-public posts exist only for their author.
    pub async fn get(&self, id: &str, viewer_uid: Option<&str>) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id.to_string())
            .await?
            .filter(|post| post.is_visible_to(viewer_uid))
            .ok_or_else(|| not_found(id))
    }

    pub async fn edit(
        &self,
        id: &str,
        editor_uid: &str,
        patch: VersePatch,
    ) -> Result<Post, DomainError> {
        let mut post = self.get(id, Some(editor_uid)).await?;
        if post.author_id != editor_uid {
            return Err(DomainError::Forbidden);
        }
        if let Some(title) = &patch.title {
            validate_text("title", title)?;
        }
        if let Some(content) = &patch.content {
            validate_text("content", content)?;
        }

        post.edit(patch.title.map(|t| t.trim().to_string()), patch.content);
        if let Some(visibility) = patch.visibility {
            post.set_visibility(visibility);
        }

        Ok(self.posts.save(post).await?)
    }

    /// The author's own private and draft verses, newest first.
    pub async fn private_verses(&self, author_uid: &str) -> Result<Vec<Post>, DomainError> {
        let mut posts: Vec<Post> = self
            .posts
            .find_by_author_id(author_uid)
            .await?
            .into_iter()
            .filter(|p| !p.is_public())
            .collect();
        sort_by_recency(&mut posts);
        Ok(posts)
    }

    /// What anyone sees on an author's profile.
    pub async fn profile(&self, author_uid: &str) -> Result<Vec<Post>, DomainError> {
        Ok(public_feed(self.posts.find_by_author_id(author_uid).await?))
    }

    /// Authors of public verses whose display name contains `query`.
    pub async fn search_authors(&self, query: &str) -> Result<Vec<AuthorSummary>, DomainError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        // Newest post first, so each author keeps their latest display copy.
        let posts = public_feed(self.posts.find_all().await?);
        let mut authors: BTreeMap<String, AuthorSummary> = BTreeMap::new();
        for post in posts {
            if !post.author_name.to_lowercase().contains(&needle) {
                continue;
            }
            authors
                .entry(post.author_id.clone())
                .or_insert_with(|| AuthorSummary {
                    uid: post.author_id.clone(),
                    name: post.author_name.clone(),
                    avatar: post.avatar.clone(),
                    public_verses: 0,
                })
                .public_verses += 1;
        }

        let mut found: Vec<AuthorSummary> = authors.into_values().collect();
        found.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(found)
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound {
        entity_type: "Post",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{User, post_fixture};
    use crate::services::testing::FakeStore;

    fn user(id: &str, name: &str) -> User {
        let mut user = User::new(
            format!("{id}@example.com"),
            "hash".to_string(),
            name.to_string(),
            String::new(),
        );
        user.id = id.to_string();
        user
    }

    fn service(store: &Arc<FakeStore>) -> PostService {
        PostService::new(store.clone(), store.clone())
    }

    fn verse(title: &str, visibility: Visibility) -> NewVerse {
        NewVerse {
            title: title.to_string(),
            content: "moss and rain".to_string(),
            visibility,
        }
    }

    #[tokio::test]
    async fn test_create_copies_author_profile() {
        let store = Arc::new(FakeStore::default());
        let mut ada = user("ada", "Ada");
        ada.avatar = "/a.png".to_string();
        store.add_user(ada);

        let post = service(&store)
            .create("ada", verse("  Rain  ", Visibility::Public))
            .await
            .unwrap();

        assert_eq!(post.title, "Rain");
        assert_eq!(post.author_name, "Ada");
        assert_eq!(post.avatar, "/a.png");
        assert!(post.created_at.is_some());
        assert_eq!(store.stored_post(&post.id), Some(post));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let store = Arc::new(FakeStore::default());
        store.add_user(user("ada", "Ada"));

        let err = service(&store)
            .create("ada", verse("   ", Visibility::Public))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_private_post_hidden_from_others() {
        let mut post = post_fixture("secret");
        post.is_private = Some(true);
        let store = Arc::new(FakeStore::with_posts(vec![post]));
        let posts = service(&store);

        assert!(posts.get("secret", Some("author-1")).await.is_ok());
        assert!(matches!(
            posts.get("secret", Some("intruder")).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(posts.get("secret", None).await.is_err());
    }

    #[tokio::test]
    async fn test_edit_by_author_stamps_edited_at() {
        let store = Arc::new(FakeStore::with_posts(vec![post_fixture("p")]));
        let posts = service(&store);

        let patch = VersePatch {
            content: Some("new words".to_string()),
            visibility: Some(Visibility::Draft),
            ..VersePatch::default()
        };
        let edited = posts.edit("p", "author-1", patch).await.unwrap();

        assert_eq!(edited.content, "new words");
        assert!(edited.edited_at.is_some());
        assert_eq!(edited.visibility(), Visibility::Draft);
    }

    #[tokio::test]
    async fn test_edit_by_other_user_forbidden() {
        let store = Arc::new(FakeStore::with_posts(vec![post_fixture("p")]));

        let err = service(&store)
            .edit("p", "someone", VersePatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Forbidden));
    }

    #[tokio::test]
    async fn test_profile_and_private_lists_split_on_visibility() {
        let now = Utc::now();
        let mut public = post_fixture("public");
        public.created_at = Some(now);
        let mut private = post_fixture("private");
        private.is_private = Some(true);
        private.created_at = Some(now - Duration::hours(1));
        let mut draft = post_fixture("draft");
        draft.is_draft = Some(true);
        draft.created_at = Some(now);
        let store = Arc::new(FakeStore::with_posts(vec![public, private, draft]));
        let posts = service(&store);

        let profile = posts.profile("author-1").await.unwrap();
        let hidden = posts.private_verses("author-1").await.unwrap();

        assert_eq!(profile.len(), 1);
        assert_eq!(profile[0].id, "public");
        let ids: Vec<&str> = hidden.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["draft", "private"]);
    }

    #[tokio::test]
    async fn test_search_authors_ignores_non_public_posts() {
        let mut shown = post_fixture("1");
        shown.author_id = "u-rae".to_string();
        shown.author_name = "Rae Moss".to_string();
        let mut hidden = post_fixture("2");
        hidden.author_id = "u-ray".to_string();
        hidden.author_name = "Ray".to_string();
        hidden.is_draft = Some(true);
        let store = Arc::new(FakeStore::with_posts(vec![shown, hidden]));
        let posts = service(&store);

        let found = posts.search_authors("  RA ").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].uid, "u-rae");
        assert_eq!(found[0].public_verses, 1);
        assert!(posts.search_authors(" ").await.unwrap().is_empty());
    }
}
