//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::Preference;
use crate::error::RepoError;
use crate::ports::{BaseRepository, PreferenceRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the device setting.
    #[default]
    System,
}

impl Theme {
    /// Dark becomes light; anything else becomes dark.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Persisted theme per owner (a user id or an anonymous device id).
pub struct ThemePreferences {
    store: Arc<dyn PreferenceRepository>,
}

impl ThemePreferences {
    pub fn new(store: Arc<dyn PreferenceRepository>) -> Self {
        Self { store }
    }

    /// The owner's theme. A missing, unreadable or unknown preference reads
    /// as [`Theme::System`].
    pub async fn get(&self, owner: &str) -> Theme {
        let stored = match self.store.find_by_id(owner.to_string()).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(owner, error = %e, "Could not read theme preference");
                return Theme::default();
            }
        };

        match stored {
            Some(pref) => pref.theme.parse().unwrap_or_else(|e| {
                tracing::warn!(owner, error = %e, "Ignoring stored theme");
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    pub async fn set(&self, owner: &str, theme: Theme) -> Result<(), RepoError> {
        self.store
            .save(Preference::new(owner, theme.as_str()))
            .await?;
        Ok(())
    }

    pub async fn toggle(&self, owner: &str) -> Result<Theme, RepoError> {
        let next = self.get(owner).await.toggled();
        self.set(owner, next).await?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeStore;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::System.toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!(" Dark ".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[tokio::test]
    async fn test_preference_per_owner() {
        let store = Arc::new(FakeStore::default());
        let prefs = ThemePreferences::new(store.clone());

        assert_eq!(prefs.get("user:u1").await, Theme::System);
        assert_eq!(prefs.toggle("user:u1").await.unwrap(), Theme::Dark);
        assert_eq!(prefs.toggle("user:u1").await.unwrap(), Theme::Light);
        prefs.set("device:d1", Theme::Dark).await.unwrap();

        assert_eq!(prefs.get("user:u1").await, Theme::Light);
        assert_eq!(prefs.get("device:d1").await, Theme::Dark);
        assert_eq!(store.stored_theme("user:u1").as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn test_unknown_stored_theme_reads_as_system() {
        let store = Arc::new(FakeStore::default());
        store.save(Preference::new("user:u1", "sepia")).await.unwrap();

        let prefs = ThemePreferences::new(store);

        assert_eq!(prefs.get("user:u1").await, Theme::System);
    }
}
