use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display preferences of one owner.
///
/// The owner is `user:{uid}` for an account or `device:{id}` for an
/// anonymous browser. `theme` holds the stored name as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    pub owner: String,
    pub theme: String,
    pub updated_at: DateTime<Utc>,
}

impl Preference {
    pub fn new(owner: &str, theme: &str) -> Self {
        Self {
            owner: owner.to_string(),
            theme: theme.to_string(),
            updated_at: Utc::now(),
        }
    }
}
