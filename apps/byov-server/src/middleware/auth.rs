//! Authentication extractors.
//!
//! Both resolve the bearer token through the `AuthProvider` held in
//! `AppState`, so handlers never touch tokens directly:
//! ```ignore
//! async fn create(viewer: Viewer) -> impl Responder {
//!     format!("Hello, {}!", viewer.0.uid)
//! }
//! ```

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use byov_core::domain::{AuthState, Identity};
use byov_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// A signed-in viewer. Rejects the request with 401 otherwise.
#[derive(Debug, Clone)]
pub struct Viewer(pub Identity);

/// Whoever is looking, signed in or not. Never rejects.
#[derive(Debug, Clone)]
pub struct OptionalViewer(pub AuthState);

/// Bearer token from the `Authorization` header, `None` when the header is absent.
fn bearer_token(req: &HttpRequest) -> Result<Option<String>, AuthError> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(|token| Some(token.trim().to_string()))
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>().cloned().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AppError::Internal("Server configuration error".to_string())
    })
}

impl FromRequest for Viewer {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = app_state(req);
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state?;
            let token = token?.ok_or(AuthError::MissingAuth)?;
            let identity = state.auth.authenticate(&token).await?;
            Ok(Viewer(identity))
        })
    }
}

impl FromRequest for OptionalViewer {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = app_state(req);
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state?;
            let token = match token {
                Ok(Some(token)) => token,
                Ok(None) => return Ok(OptionalViewer(AuthState::anonymous())),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring malformed authorization header");
                    return Ok(OptionalViewer(AuthState::anonymous()));
                }
            };

            match state.auth.authenticate(&token).await {
                Ok(identity) => Ok(OptionalViewer(AuthState::signed_in(identity))),
                Err(e) => {
                    tracing::debug!(error = %e, "Treating viewer as anonymous");
                    Ok(OptionalViewer(AuthState::anonymous()))
                }
            }
        })
    }
}
