use chrono::{DateTime, Utc};
use serde::Serialize;

/// The signed-in identity, as supplied by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub roles: Vec<String>,
    /// Identifier of the credential this identity was resolved from.
    #[serde(skip)]
    pub token_id: String,
    #[serde(skip)]
    pub expires_at: DateTime<Utc>,
}

impl Identity {
    /// Check if the user has a specific role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Auth state handed to anything identity-aware.
///
/// Passed explicitly rather than read from a global so callers and tests
/// decide who is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    pub identity: Option<Identity>,
    /// True while the provider has not yet decided.
    pub loading: bool,
}

impl AuthState {
    pub fn resolving() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    pub fn uid(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.uid.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.identity.is_some()
    }
}
