//! Results page and its HTMX fragment

use axum::extract::{Query, State};
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse, Response};
use reelscout_search::{SearchItem, SortOrder, ViewState};
use serde::Deserialize;

use crate::components::layout::{
    error_panel, escape_html, loading_indicator, page_header, render_page, search_form,
};
use crate::components::movie::{RESULTS_INDICATOR, RESULTS_TARGET, results_grid, results_header};
use crate::navigation::results_location;
use crate::server::AppState;

/// Query parameters of the results view.
#[derive(Debug, Default, Deserialize)]
pub struct ResultsQuery {
    /// Search term, as entered
    #[serde(default)]
    pub query: String,
    /// Sort order wire value; unknown values keep the API order
    #[serde(default)]
    pub sort: String,
}

impl ResultsQuery {
    fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(&self.sort)
    }
}

/// Renders the full results page.
pub async fn results_page(
    State(state): State<AppState>,
    Query(params): Query<ResultsQuery>,
) -> Html<String> {
    let term = params.query.trim();
    let sort = params.sort_order();
    let view = state.search().search_view(term, sort).await;

    let heading = if term.is_empty() {
        String::new()
    } else {
        page_header(&format!("Search Results for \"{term}\""), None)
    };

    let content = format!(
        r#"{heading}
        {form}
        {indicator}
        <section id="{RESULTS_TARGET}">
            {results}
        </section>"#,
        form = search_form(term),
        indicator = loading_indicator(RESULTS_INDICATOR),
        results = render_results(term, sort, &view),
    );

    let title = if term.is_empty() {
        "Search".to_string()
    } else {
        format!("Results for {term}")
    };
    render_page(&title, &content)
}

/// Renders only the results section for an HTMX refresh.
///
/// Sets `HX-Push-Url` so the address bar keeps the canonical results URL.
pub async fn results_fragment(
    State(state): State<AppState>,
    Query(params): Query<ResultsQuery>,
) -> Response {
    let term = params.query.trim();
    let sort = params.sort_order();
    let view = state.search().search_view(term, sort).await;

    let mut response = Html(render_results(term, sort, &view)).into_response();
    if let Ok(location) = HeaderValue::from_str(&results_location(term, sort)) {
        response.headers_mut().insert("HX-Push-Url", location);
    }
    response
}

/// Renders exactly one of loading, error, empty or the populated grid.
pub fn render_results(term: &str, sort: SortOrder, view: &ViewState<Vec<SearchItem>>) -> String {
    match view {
        ViewState::Loading => {
            r#"<p class="text-center text-gray-400 py-12" role="status">Loading...</p>"#.to_string()
        }
        ViewState::Failed(err) => error_panel(&err.message),
        ViewState::Empty => format!(
            r#"<p class="text-center text-gray-400 py-12">No results found for {}. Try a different title!</p>"#,
            escape_html(term)
        ),
        ViewState::Ready(items) => format!(
            "{}{}",
            results_header(term, items.len(), sort),
            results_grid(items)
        ),
    }
}

#[cfg(test)]
mod tests {
    use reelscout_search::{MediaType, Poster, ViewError};

    use super::*;

    #[test]
    fn test_each_state_renders_alone() {
        let failed = render_results("heat", SortOrder::Relevance, &ViewState::Failed(ViewError::new("boom")));
        assert!(failed.contains("Error:"));
        assert!(!failed.contains("movie-card"));

        let empty = render_results("<heat>", SortOrder::Relevance, &ViewState::Empty);
        assert!(empty.contains("No results found for &lt;heat&gt;. Try a different title!"));

        let loading = render_results("heat", SortOrder::Relevance, &ViewState::Loading);
        assert!(loading.contains("Loading..."));
    }

    #[test]
    fn test_ready_state_renders_header_and_cards() {
        let items = vec![SearchItem {
            title: "Heat".to_string(),
            year: "1995".to_string(),
            imdb_id: "tt0113277".to_string(),
            media_type: MediaType::Movie,
            poster: Poster::Missing,
        }];

        let html = render_results("heat", SortOrder::TitleAsc, &ViewState::Ready(items));
        assert!(html.contains("1</span> result"));
        assert_eq!(html.matches("movie-card").count(), 1);
    }
}
