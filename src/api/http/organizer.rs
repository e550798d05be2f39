// src/api/http/organizer.rs
// Serves the organizer frontend page

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::error::{ApiResult, IntoApiError};
use crate::state::AppState;

/// GET /organizer
pub async fn organizer_page_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Html<String>> {
    let page = tokio::fs::read_to_string(&state.page_path)
        .await
        .into_internal_error("Failed to load organizer page")?;

    Ok(Html(page))
}
