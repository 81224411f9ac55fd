//! Health check endpoint.

use actix_web::{HttpResponse, web};
use scribe_core::ports::BaseRepository;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - reports whether the post store is reachable.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store_ok = match state.posts.repository().count().await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(error = %e, "Health check could not reach the store");
            false
        }
    };

    let response = HealthResponse {
        status: if store_ok { "ok" } else { "unavailable" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if store_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
