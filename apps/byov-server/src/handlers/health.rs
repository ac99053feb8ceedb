//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// `connected`, `unreachable` or `in_memory`.
    pub store: &'static str,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = store_status(&state).await;
    let status = if store == "unreachable" { "degraded" } else { "ok" };

    HttpResponse::Ok().json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        store,
    })
}

#[cfg(feature = "postgres")]
async fn store_status(state: &AppState) -> &'static str {
    match &state.db {
        Some(db) => match db.ping().await {
            Ok(()) => "connected",
            Err(e) => {
                tracing::warn!(error = %e, "Database ping failed");
                "unreachable"
            }
        },
        None => "in_memory",
    }
}

#[cfg(not(feature = "postgres"))]
async fn store_status(_state: &AppState) -> &'static str {
    "in_memory"
}
