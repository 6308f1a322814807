//! Landing page and search submission

use axum::Form;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::components::layout::{card, page_header, render_page, search_form};
use crate::navigation::search_location;

/// Body of the search form.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Raw title entered by the user
    #[serde(default)]
    pub query: String,
}

/// Renders the landing page with an empty search box.
pub async fn landing_page() -> Html<String> {
    render_landing("")
}

/// Handles a search submission.
///
/// A non-blank term answers `303 See Other` pointing at the results view.
/// A blank term re-renders the landing page without navigating.
pub async fn submit_search(Form(form): Form<SearchForm>) -> Response {
    match search_location(&form.query) {
        Some(location) => {
            tracing::debug!(%location, "redirecting search submission");
            Redirect::to(&location).into_response()
        }
        None => render_landing(&form.query).into_response(),
    }
}

fn render_landing(value: &str) -> Html<String> {
    let content = format!(
        "{}{}",
        page_header(
            "Find a movie",
            Some("Search the Open Movie Database by title and open any result for full details.")
        ),
        card(None, &search_form(value.trim())),
    );

    render_page("Search", &content)
}
