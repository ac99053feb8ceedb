//! Request and response bodies for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Rejections raised before a request reaches the services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DtoError {
    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Display name is required")]
    MissingDisplayName,
}

/// Sign-up form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> Result<(), DtoError> {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => return Err(DtoError::InvalidEmail),
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(DtoError::PasswordTooShort);
        }
        if self.display_name.trim().is_empty() {
            return Err(DtoError::MissingDisplayName);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserResponse,
}

/// Search box submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub q: String,
}

/// Where the client should navigate after submitting a search.
///
/// `location` is absent when the query was blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDispatch {
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: String,
    /// What the toggle would switch to.
    pub next: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, name: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            email: email.to_string(),
            password: password.to_string(),
            display_name: name.to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_valid_registration() {
        assert_eq!(request("ada@example.com", "verses-123", "Ada").validate(), Ok(()));
    }

    #[test]
    fn test_registration_rejections() {
        assert_eq!(
            request("ada.example.com", "verses-123", "Ada").validate(),
            Err(DtoError::InvalidEmail)
        );
        assert_eq!(
            request("ada@example.com", "short", "Ada").validate(),
            Err(DtoError::PasswordTooShort)
        );
        assert_eq!(
            request("ada@example.com", "verses-123", "  ").validate(),
            Err(DtoError::MissingDisplayName)
        );
    }

    #[test]
    fn test_register_accepts_camel_case() {
        let req: RegisterUserRequest = serde_json::from_str(
            r#"{"email":"a@b.co","password":"12345678","displayName":"Ada"}"#,
        )
        .unwrap();

        assert_eq!(req.display_name, "Ada");
        assert!(req.avatar.is_none());
    }
}
