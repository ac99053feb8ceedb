use actix_web::{HttpResponse, web};

use crate::middleware::auth::Viewer;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts/{id}/like
pub async fn like(
    state: web::Data<AppState>,
    viewer: Viewer,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let status = state.like_service.like(&viewer.0.uid, &path).await?;
    Ok(HttpResponse::Ok().json(status))
}

/// DELETE /api/posts/{id}/like
pub async fn unlike(
    state: web::Data<AppState>,
    viewer: Viewer,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let status = state.like_service.unlike(&viewer.0.uid, &path).await?;
    Ok(HttpResponse::Ok().json(status))
}
