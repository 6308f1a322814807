//! HTMX + Tailwind web server for Reelscout
//!
//! Serves the server-rendered views, the HTMX results fragment and a JSON
//! API. Handlers share one search service and hold no other state.

use axum::Router;
use axum::routing::get;
use reelscout_core::{ReelscoutError, ServerConfig};
use reelscout_search::MovieSearchService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{api_movie, api_search, health};
use crate::pages::{landing_page, movie_page, results_fragment, results_page, submit_search};

/// Errors raised while starting or running the web server.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Host and port could not be resolved
    #[error("Invalid server configuration: {0}")]
    Config(#[from] ReelscoutError),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: std::net::SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Accept loop stopped with an error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    search: MovieSearchService,
}

impl AppState {
    /// Creates state around a search service.
    pub fn new(search: MovieSearchService) -> Self {
        Self { search }
    }

    /// Search service used by every view.
    pub fn search(&self) -> &MovieSearchService {
        &self.search
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Main pages (HTMX + Tailwind)
        .route("/", get(landing_page).post(submit_search))
        .route("/search", get(results_page))
        .route("/movies/{id}", get(movie_page))
        // HTMX partial update endpoints
        .route("/htmx/search", get(results_fragment))
        // JSON API endpoints
        .route("/api/search", get(api_search))
        .route("/api/movies/{id}", get(api_movie))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until the process stops.
///
/// # Errors
/// - `WebError::Config` - host and port do not form a socket address
/// - `WebError::Bind` - address could not be bound
/// - `WebError::Serve` - accept loop failed
pub async fn run_server(config: &ServerConfig, search: MovieSearchService) -> Result<(), WebError> {
    let addr = config.socket_addr()?;
    let app = build_router(AppState::new(search));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| WebError::Bind { addr, source })?;

    tracing::info!("Reelscout running on http://{addr}");
    axum::serve(listener, app).await.map_err(WebError::Serve)
}
