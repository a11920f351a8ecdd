use std::any::Any;

use axum::{
    http::{header, Method},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
};

use crate::errors::AppError;
use crate::plans::handlers::handle_plans;
use crate::recommend::handlers::handle_recommend;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Converts a handler panic into the opaque 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

/// The extension calls from a `chrome-extension://` origin, so every origin is allowed.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/plans", post(handle_plans).fallback(not_found))
        .route("/ai-recommend", post(handle_recommend).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer())
}
