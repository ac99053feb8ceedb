//! Auth provider backed by JWTs, with logout as revocation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use byov_core::domain::Identity;
use byov_core::ports::{AuthError, AuthProvider, Cache, TokenService};

/// Resolves bearer tokens and remembers logged-out tokens until they expire.
pub struct JwtAuthProvider {
    tokens: Arc<dyn TokenService>,
    revocations: Arc<dyn Cache>,
}

impl JwtAuthProvider {
    pub fn new(tokens: Arc<dyn TokenService>, revocations: Arc<dyn Cache>) -> Self {
        Self {
            tokens,
            revocations,
        }
    }

    fn revocation_key(token_id: &str) -> String {
        format!("revoked:{token_id}")
    }
}

#[async_trait]
impl AuthProvider for JwtAuthProvider {
    async fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.tokens.validate_token(token)?;

        if self
            .revocations
            .exists(&Self::revocation_key(&claims.token_id))
            .await
        {
            return Err(AuthError::TokenRevoked);
        }

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::InvalidToken("bad expiry".to_string()))?;

        Ok(Identity {
            uid: claims.user_id,
            email: claims.email,
            roles: claims.roles,
            token_id: claims.token_id,
            expires_at,
        })
    }

    async fn logout(&self, identity: &Identity) -> Result<(), AuthError> {
        let remaining = (identity.expires_at - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        if remaining.is_zero() {
            return Ok(());
        }

        self.revocations
            .set(&Self::revocation_key(&identity.token_id), "1", Some(remaining))
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        tracing::info!(uid = %identity.uid, "Session logged out");
        Ok(())
    }
}
