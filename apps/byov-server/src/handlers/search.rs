//! Author search and search-box dispatch.

use actix_web::{HttpResponse, web};

use byov_core::services::search_location;
use byov_shared::dto::{SearchDispatch, SearchRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/search?q=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchRequest>,
) -> AppResult<HttpResponse> {
    let authors = state.post_service.search_authors(&query.q).await?;
    Ok(HttpResponse::Ok().json(authors))
}

/// POST /api/search - where the search box should navigate
pub async fn dispatch(body: web::Json<SearchRequest>) -> HttpResponse {
    HttpResponse::Ok().json(SearchDispatch {
        location: search_location(&body.q),
    })
}
