// src/api/http/textfiles.rs
// Handlers for the text file CRUD endpoints under /textfile-api

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::error::{ApiError, ApiResult, IntoApiError, IntoApiErrorOption};
use crate::api::types::{FileActionResponse, FileContentResponse, FileListResponse, TextFileQuery};
use crate::file_system::normalize_filename;
use crate::state::AppState;

const MISSING_FILENAME: &str = "Missing filename";
const MISSING_FILENAME_OR_DATA: &str = "Missing filename or data";

/// A malformed query string is treated like an empty one, so the handler
/// answers with its own missing-parameter error.
fn query_or_default(query: Result<Query<TextFileQuery>, QueryRejection>) -> TextFileQuery {
    match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            debug!("Unparseable query string: {}", rejection);
            TextFileQuery::default()
        }
    }
}

/// Percent-decode `data` once more on top of the query-string decoding.
/// Falls back to the value as received when the result is not valid UTF-8.
pub fn decode_data(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            debug!("Keeping data undecoded: {}", e);
            raw.to_string()
        }
    }
}

/// Extract a normalized filename plus decoded data, or reject with 400.
fn filename_and_data(query: &TextFileQuery) -> ApiResult<(String, String)> {
    match (query.filename(), query.data()) {
        (Some(filename), Some(data)) => Ok((normalize_filename(filename), decode_data(data))),
        _ => Err(ApiError::bad_request(MISSING_FILENAME_OR_DATA)),
    }
}

fn filename_only(query: &TextFileQuery) -> ApiResult<String> {
    query
        .filename()
        .map(normalize_filename)
        .ok_or_bad_request(MISSING_FILENAME)
}

/// GET /textfile-api/all
pub async fn list_files_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FileListResponse>> {
    let files = state
        .store
        .list()
        .await
        .into_internal_error("Failed to read storage directory")?;

    Ok(Json(FileListResponse { files }))
}

/// GET /textfile-api/new?filename=&data=
pub async fn create_file_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TextFileQuery>, QueryRejection>,
) -> ApiResult<Json<FileActionResponse>> {
    let (filename, data) = filename_and_data(&query_or_default(query))?;

    state
        .store
        .create(&filename, &data)
        .await
        .into_internal_error("Failed to create file")?;

    info!("Created {} ({} bytes)", filename, data.len());
    Ok(Json(FileActionResponse::new("File created successfully", filename)))
}

/// GET /textfile-api/read?filename=
pub async fn read_file_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TextFileQuery>, QueryRejection>,
) -> ApiResult<Json<FileContentResponse>> {
    let filename = filename_only(&query_or_default(query))?;

    // Missing and unreadable files both surface as 404
    let content = state
        .store
        .read(&filename)
        .await
        .into_not_found_error("File not found")?;

    Ok(Json(FileContentResponse { filename, content }))
}

/// GET /textfile-api/remove?filename=
pub async fn remove_file_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TextFileQuery>, QueryRejection>,
) -> ApiResult<Json<FileActionResponse>> {
    let filename = filename_only(&query_or_default(query))?;

    state
        .store
        .remove(&filename)
        .await
        .into_not_found_error("File not found or cannot be deleted")?;

    info!("Deleted {}", filename);
    Ok(Json(FileActionResponse::new("File deleted successfully", filename)))
}

/// GET /textfile-api/append?filename=&data=
pub async fn append_file_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TextFileQuery>, QueryRejection>,
) -> ApiResult<Json<FileActionResponse>> {
    let (filename, data) = filename_and_data(&query_or_default(query))?;

    state
        .store
        .append(&filename, &data)
        .await
        .into_internal_error("Failed to append to file")?;

    info!("Appended {} bytes to {}", data.len(), filename);
    Ok(Json(FileActionResponse::new("Data appended successfully", filename)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn query(filename: Option<&str>, data: Option<&str>) -> TextFileQuery {
        TextFileQuery {
            filename: filename.map(str::to_string),
            data: data.map(str::to_string),
        }
    }

    #[test]
    fn test_decode_data_second_pass() {
        assert_eq!(decode_data("hello%20world"), "hello world");
        assert_eq!(decode_data("plain"), "plain");
        // Lone percent signs pass through
        assert_eq!(decode_data("100%"), "100%");
    }

    #[test]
    fn test_decode_data_keeps_invalid_utf8_raw() {
        assert_eq!(decode_data("bad%FFbyte"), "bad%FFbyte");
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let err = filename_and_data(&query(Some("a"), Some(""))).unwrap_err();
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, MISSING_FILENAME_OR_DATA);

        let err = filename_only(&query(Some(""), None)).unwrap_err();
        assert_eq!(err.message, MISSING_FILENAME);
    }

    #[test]
    fn test_filename_is_normalized() {
        let (filename, data) = filename_and_data(&query(Some("todo"), Some("milk"))).unwrap();
        assert_eq!(filename, "todo.txt");
        assert_eq!(data, "milk");
    }
}
