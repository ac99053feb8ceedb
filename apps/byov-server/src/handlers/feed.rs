//! Home feed.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use byov_core::services::HomePage;

use crate::middleware::auth::{OptionalViewer, Viewer};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/feed - never fails; a failed load is reported inside the page.
pub async fn home(state: web::Data<AppState>, viewer: OptionalViewer) -> HttpResponse {
    let feed = state.feed.load_state().await;
    HttpResponse::Ok().json(HomePage::build(&feed, &viewer.0, Utc::now()))
}

/// POST /api/feed/reconcile
pub async fn reconcile(state: web::Data<AppState>, viewer: Viewer) -> AppResult<HttpResponse> {
    tracing::info!(uid = %viewer.0.uid, "Manual like reconciliation requested");
    let report = state.feed.reconcile().await?;
    Ok(HttpResponse::Ok().json(report))
}
