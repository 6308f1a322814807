//! Movie detail page

use axum::extract::{Path, State};
use axum::response::Html;
use reelscout_search::ViewState;
use reelscout_search::service::DETAIL_NOT_FOUND_MESSAGE;

use crate::components::layout::{error_panel, render_page};
use crate::components::movie::movie_detail;
use crate::server::AppState;

/// Renders the detail view for the identifier in the route.
pub async fn movie_page(State(state): State<AppState>, Path(imdb_id): Path<String>) -> Html<String> {
    let view = state.search().detail_view(&imdb_id).await;

    match view {
        ViewState::Ready(detail) => render_page(&detail.heading(), &movie_detail(&detail)),
        ViewState::Failed(err) => render_page("Movie details", &error_panel(&err.message)),
        ViewState::Loading | ViewState::Empty => {
            render_page("Movie details", &error_panel(DETAIL_NOT_FOUND_MESSAGE))
        }
    }
}
