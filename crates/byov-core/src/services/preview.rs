//! Post preview cards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Post;

/// Excerpt budget in characters.
pub const EXCERPT_CHARS: usize = 150;

/// Avatar shown when the author has none.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Summary of one post as shown in the feed grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPreview {
    pub id: String,
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub author_name: String,
    pub author_avatar: String,
    pub likes_count: u64,
    pub date_label: String,
    pub edited: bool,
}

impl PostPreview {
    /// Render `post`. `now` stands in for a missing creation time.
    pub fn render(post: &Post, now: DateTime<Utc>) -> Self {
        let avatar = if post.avatar.is_empty() {
            PLACEHOLDER_AVATAR.to_string()
        } else {
            post.avatar.clone()
        };

        Self {
            id: post.id.clone(),
            href: post_href(&post.id),
            title: post.title.clone(),
            excerpt: excerpt(&post.content).to_string(),
            author_name: post.author_name.clone(),
            author_avatar: avatar,
            likes_count: post.likes_count,
            date_label: date_label(post.created_at.unwrap_or(now)),
            edited: post.edited_at.is_some(),
        }
    }
}

/// Detail route for a post.
pub fn post_href(id: &str) -> String {
    format!("/post/{id}")
}

/// The first [`EXCERPT_CHARS`] characters of `content`.
pub fn excerpt(content: &str) -> &str {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => &content[..end],
        None => content,
    }
}

/// Month and day, e.g. `Mar 7`.
pub fn date_label(at: DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}
