//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(posts::get_post))
                        .route(web::put().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post))
                        .default_service(web::to(method_not_allowed)),
                ),
        );
}

/// Fallback for requests that match no route.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("No such resource".to_string()))
}

async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

/// JSON extractor settings: body errors become RFC 7807 responses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| match &err {
            JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                AppError::PayloadTooLarge(err.to_string()).into()
            }
            _ => AppError::BadRequest(err.to_string()).into(),
        })
}
