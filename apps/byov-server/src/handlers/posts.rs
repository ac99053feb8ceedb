//! Writing and reading verses.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Serialize;

use byov_core::domain::Post;
use byov_core::services::{NewVerse, PostPreview, VersePatch};

use crate::middleware::auth::{OptionalViewer, Viewer};
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub uid: String,
    pub verses: Vec<PostPreview>,
}

fn previews(posts: &[Post]) -> Vec<PostPreview> {
    let now = Utc::now();
    posts.iter().map(|p| PostPreview::render(p, now)).collect()
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    viewer: Viewer,
    body: web::Json<NewVerse>,
) -> AppResult<HttpResponse> {
    let post = state
        .post_service
        .create(&viewer.0.uid, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{id}
pub async fn detail(
    state: web::Data<AppState>,
    viewer: OptionalViewer,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.post_service.get(&path, viewer.0.uid()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id}
pub async fn edit(
    state: web::Data<AppState>,
    viewer: Viewer,
    path: web::Path<String>,
    body: web::Json<VersePatch>,
) -> AppResult<HttpResponse> {
    let post = state
        .post_service
        .edit(&path, &viewer.0.uid, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/private-verses
pub async fn private_verses(state: web::Data<AppState>, viewer: Viewer) -> AppResult<HttpResponse> {
    let posts = state.post_service.private_verses(&viewer.0.uid).await?;
    Ok(HttpResponse::Ok().json(previews(&posts)))
}

/// GET /api/profile/{uid}
pub async fn profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let uid = path.into_inner();
    let posts = state.post_service.profile(&uid).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse {
        verses: previews(&posts),
        uid,
    }))
}
