pub mod middleware;
pub mod protocol;
pub mod rest;
pub mod state;

pub use middleware::log_requests;
pub use rest::{get_points_handler, process_receipt_handler, ApiDoc};

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        Method,
    },
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the complete application: receipt routes plus the Swagger UI.
pub fn app(app_state: Arc<AppState>) -> Router {
    let config = app_state.config.clone();

    let mut api_router = Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(get_points_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    if let Some(origin) = config.cors_allow_origin.clone() {
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, ACCEPT]);
        api_router = api_router.layer(cors);
    }

    Router::new()
        .merge(api_router.with_state(app_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn(log_requests))
}
