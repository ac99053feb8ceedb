use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A like record (user liked a post).
///
/// The id is derived from the pair so a user can like a post at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(user_id: &str, post_id: &str) -> Self {
        Self {
            id: Self::key(user_id, post_id),
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Composite key: `{user_id}_{post_id}`.
    pub fn key(user_id: &str, post_id: &str) -> String {
        format!("{user_id}_{post_id}")
    }
}
