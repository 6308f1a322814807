//! API handlers for title search and lookup

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use reelscout_search::service::{detail_error_message, search_error_message};
use reelscout_search::{MovieDetail, MovieSearchError, SearchItem, SortOrder};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::server::AppState;

/// Error response: a status code and `{"error": message}`.
pub type ApiError = (StatusCode, Json<Value>);

/// Query parameters of `GET /api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct ApiSearchQuery {
    /// Search term
    #[serde(default)]
    pub q: String,
    /// Sort order wire value
    #[serde(default)]
    pub sort: String,
}

/// Searches titles and returns the sorted list as JSON.
///
/// # Errors
/// Returns an [`ApiError`] with the status from [`status_for`].
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<ApiSearchQuery>,
) -> Result<Json<Vec<SearchItem>>, ApiError> {
    let term = params.q.trim();
    let mut items = state
        .search()
        .search_titles(term)
        .await
        .map_err(|err| api_error(&err, search_error_message(&err, term)))?;

    SortOrder::from_param(&params.sort).apply(&mut items);
    Ok(Json(items))
}

/// Returns the full record for one title as JSON.
///
/// # Errors
/// Returns an [`ApiError`] with the status from [`status_for`].
pub async fn api_movie(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> Result<Json<MovieDetail>, ApiError> {
    state
        .search()
        .lookup_title(&imdb_id)
        .await
        .map(Json)
        .map_err(|err| api_error(&err, detail_error_message(&err)))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// HTTP status reported for a search or lookup failure.
pub fn status_for(err: &MovieSearchError) -> StatusCode {
    match err {
        MovieSearchError::EmptyQuery => StatusCode::BAD_REQUEST,
        MovieSearchError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
        MovieSearchError::NotFound { .. } => StatusCode::NOT_FOUND,
        MovieSearchError::HttpStatus { .. }
        | MovieSearchError::Network { .. }
        | MovieSearchError::Parse { .. } => StatusCode::BAD_GATEWAY,
    }
}

fn api_error(err: &MovieSearchError, message: String) -> ApiError {
    (status_for(err), Json(json!({ "error": message })))
}
