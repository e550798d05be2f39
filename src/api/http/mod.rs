// src/api/http/mod.rs
// HTTP router composition

use axum::{
    handler::Handler,
    http::{header, HeaderValue},
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api::error::ApiError;
use crate::state::AppState;

mod organizer;
mod textfiles;

pub use organizer::organizer_page_handler;
pub use textfiles::{
    append_file_handler,
    create_file_handler,
    decode_data,
    list_files_handler,
    read_file_handler,
    remove_file_handler,
};

/// Handler for any path/method pair without a route
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Route only GET to `handler`. HEAD and every other method land on
/// `route_not_found`, so a known path hit with the wrong method answers 404
/// rather than 405 and never reaches the handler.
fn get_only<H, T>(handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    get(handler).head(route_not_found).fallback(route_not_found)
}

/// Build the full application router. The cross-origin headers are set on
/// every response, fallbacks included.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/organizer", get_only(organizer_page_handler))
        .route("/textfile-api/all", get_only(list_files_handler))
        .route("/textfile-api/new", get_only(create_file_handler))
        .route("/textfile-api/read", get_only(read_file_handler))
        .route("/textfile-api/remove", get_only(remove_file_handler))
        .route("/textfile-api/append", get_only(append_file_handler))
        .fallback(route_not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
