//! Authentication handlers.

use actix_web::{HttpResponse, web};

use byov_core::domain::User;
use byov_core::ports::{
    AuthError, AuthProvider, BaseRepository, PasswordService, TokenService, UserRepository,
};
use byov_shared::ApiResponse;
use byov_shared::dto::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};

use crate::middleware::auth::Viewer;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_ROLES: &[&str] = &["user"];

fn user_response(user: &User) -> UserResponse {
    UserResponse {
        uid: user.id.clone(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        avatar: user.avatar.clone(),
        created_at: user.created_at,
    }
}

fn issue_token(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let roles = DEFAULT_ROLES.iter().map(|r| r.to_string()).collect();
    let access_token = state.tokens.generate_token(&user.id, &user.email, roles)?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds().max(0) as u64,
        user: user_response(user),
    })
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let email = req.email.trim().to_lowercase();
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = state.passwords.hash(&req.password)?;
    let user = User::new(
        email,
        password_hash,
        req.display_name.trim().to_string(),
        req.avatar.unwrap_or_default(),
    );
    let saved = state.users.save(user).await?;
    tracing::info!(uid = %saved.id, "User registered");

    Ok(HttpResponse::Created().json(issue_token(&state, &saved)?))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .find_by_email(&req.email.trim().to_lowercase())
        .await?
        .ok_or_else(|| AppError::from(AuthError::InvalidCredentials))?;

    if !state.passwords.verify(&req.password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(HttpResponse::Ok().json(issue_token(&state, &user)?))
}

/// POST /api/auth/logout - revokes the presented token
pub async fn logout(state: web::Data<AppState>, viewer: Viewer) -> AppResult<HttpResponse> {
    state.auth.logout(&viewer.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Logged out")))
}

/// GET /api/auth/me
pub async fn me(state: web::Data<AppState>, viewer: Viewer) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(viewer.0.uid.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", viewer.0.uid)))?;

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
