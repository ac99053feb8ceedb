use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

/// Opaque post identifier assigned by the store on creation.
pub type PostId = String;

/// Post entity - a verse written by a user.
///
/// `author_name` and `avatar` are copies of the author's profile taken when the
/// post was written. `likes_count` caches the number of likes referencing the
/// post and is corrected by reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub avatar: String,
    #[serde(default)]
    pub likes_count: u64,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
}

/// Where a post may be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Draft,
}

impl Post {
    /// Create a new post written by `author`.
    pub fn new(author: &User, title: String, content: String, visibility: Visibility) -> Self {
        let mut post = Self {
            id: Uuid::new_v4().simple().to_string(),
            title,
            content,
            author_id: author.id.clone(),
            author_name: author.display_name.clone(),
            avatar: author.avatar.clone(),
            likes_count: 0,
            created_at: Some(Utc::now()),
            edited_at: None,
            is_private: None,
            is_draft: None,
        };
        post.set_visibility(visibility);
        post
    }

    /// The public-feed rule: neither private nor a draft.
    ///
    /// Absent flags count as `false`. Every listing of posts filters with this.
    pub fn is_public(&self) -> bool {
        self.is_private != Some(true) && self.is_draft != Some(true)
    }

    /// Draft wins over private when both flags are set.
    pub fn visibility(&self) -> Visibility {
        if self.is_draft == Some(true) {
            Visibility::Draft
        } else if self.is_private == Some(true) {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.is_private = Some(visibility == Visibility::Private);
        self.is_draft = Some(visibility == Visibility::Draft);
    }

    /// Whether `viewer_uid` may open this post.
    pub fn is_visible_to(&self, viewer_uid: Option<&str>) -> bool {
        self.is_public() || viewer_uid == Some(self.author_id.as_str())
    }

    /// Apply an edit by the author and stamp `edited_at`.
    pub fn edit(&mut self, title: Option<String>, content: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.edited_at = Some(Utc::now());
    }
}

#[cfg(test)]
pub(crate) fn fixture(id: &str) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Verse {id}"),
        content: "Under the canopy the rain keeps time.".to_string(),
        author_id: "author-1".to_string(),
        author_name: "Ada".to_string(),
        avatar: String::new(),
        likes_count: 0,
        created_at: None,
        edited_at: None,
        is_private: None,
        is_draft: None,
    }
}
