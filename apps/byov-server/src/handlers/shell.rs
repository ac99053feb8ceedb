//! Navigation shell: brand, menu and theme for the current viewer.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};

use byov_core::services::{NavLayout, NavMenu, Theme, nav_menu};

use super::preferences::ThemeOwner;
use crate::middleware::auth::OptionalViewer;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ShellQuery {
    #[serde(default)]
    pub layout: NavLayout,
}

#[derive(Serialize)]
pub struct ShellResponse {
    pub theme: Theme,
    pub menu: NavMenu,
}

/// GET /api/shell?layout=desktop|mobile
pub async fn shell(
    req: HttpRequest,
    state: web::Data<AppState>,
    viewer: OptionalViewer,
    query: web::Query<ShellQuery>,
) -> HttpResponse {
    let owner = ThemeOwner::resolve(&req, &viewer.0);
    let theme = state.themes.get(&owner.key).await;
    let menu = nav_menu(&viewer.0, theme, query.layout);

    owner
        .respond(HttpResponse::Ok())
        .json(ShellResponse { theme, menu })
}
