//! Theme preference, kept per signed-in user or per anonymous device.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, web};

use byov_core::domain::AuthState;
use byov_core::services::Theme;
use byov_shared::dto::{ThemeRequest, ThemeResponse};

use crate::middleware::auth::OptionalViewer;
use crate::middleware::error::AppResult;
use crate::state::AppState;

pub const DEVICE_COOKIE: &str = "byov_device";

/// Whose preference applies to this request.
pub(super) struct ThemeOwner {
    pub key: String,
    /// Set when an anonymous device was seen for the first time.
    pub new_device: Option<Cookie<'static>>,
}

impl ThemeOwner {
    pub fn resolve(req: &HttpRequest, auth: &AuthState) -> Self {
        if let Some(uid) = auth.uid() {
            return Self {
                key: format!("user:{uid}"),
                new_device: None,
            };
        }

        if let Some(cookie) = req.cookie(DEVICE_COOKIE) {
            return Self {
                key: format!("device:{}", cookie.value()),
                new_device: None,
            };
        }

        let device = uuid::Uuid::new_v4().simple().to_string();
        let cookie = Cookie::build(DEVICE_COOKIE, device.clone())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .permanent()
            .finish();
        Self {
            key: format!("device:{device}"),
            new_device: Some(cookie),
        }
    }

    pub fn respond(self, mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
        if let Some(cookie) = self.new_device {
            builder.cookie(cookie);
        }
        builder
    }
}

fn theme_body(theme: Theme) -> ThemeResponse {
    ThemeResponse {
        theme: theme.to_string(),
        next: theme.toggled().to_string(),
    }
}

/// GET /api/preferences/theme
pub async fn get_theme(
    req: HttpRequest,
    state: web::Data<AppState>,
    viewer: OptionalViewer,
) -> HttpResponse {
    let owner = ThemeOwner::resolve(&req, &viewer.0);
    let theme = state.themes.get(&owner.key).await;
    owner
        .respond(HttpResponse::Ok())
        .json(theme_body(theme))
}

/// PUT /api/preferences/theme
pub async fn set_theme(
    req: HttpRequest,
    state: web::Data<AppState>,
    viewer: OptionalViewer,
    body: web::Json<ThemeRequest>,
) -> AppResult<HttpResponse> {
    let theme: Theme = body.theme.parse()?;
    let owner = ThemeOwner::resolve(&req, &viewer.0);
    state.themes.set(&owner.key, theme).await?;
    Ok(owner
        .respond(HttpResponse::Ok())
        .json(theme_body(theme)))
}

/// POST /api/preferences/theme/toggle
pub async fn toggle_theme(
    req: HttpRequest,
    state: web::Data<AppState>,
    viewer: OptionalViewer,
) -> AppResult<HttpResponse> {
    let owner = ThemeOwner::resolve(&req, &viewer.0);
    let theme = state.themes.toggle(&owner.key).await?;
    tracing::debug!(theme = %theme, "Theme toggled");
    Ok(owner
        .respond(HttpResponse::Ok())
        .json(theme_body(theme)))
}
