//! Movie search service
//!
//! Runs one provider call per view request and maps the outcome onto the
//! state a view renders, including the user-facing error wording.

use std::sync::Arc;

use reelscout_core::{ReelscoutConfig, RuntimeMode};

use crate::errors::MovieSearchError;
use crate::providers::{DemoProvider, MovieDatabase, OmdbProvider};
use crate::sort::SortOrder;
use crate::types::{MovieDetail, SearchItem, ViewError, ViewState};

/// Shown when a search is submitted without a title.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a movie title to search.";

/// Shown when no API key has been configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "OMDb API key is not configured. Set OMDB_API_KEY before starting Reelscout.";

/// Shown when a lookup fails without an API-provided message.
pub const DETAIL_NOT_FOUND_MESSAGE: &str = "Movie details not found.";

/// Media search service shared by every view.
#[derive(Debug, Clone)]
pub struct MovieSearchService {
    provider: Arc<dyn MovieDatabase>,
}

impl MovieSearchService {
    /// Creates a service over an explicit provider.
    pub fn new(provider: Arc<dyn MovieDatabase>) -> Self {
        Self { provider }
    }

    /// Creates the service matching the configured runtime mode.
    ///
    /// Production talks to OMDb with the injected key; development serves the
    /// offline demo catalogue.
    ///
    /// # Errors
    /// - `MovieSearchError::Network` - HTTP client could not be constructed
    pub fn from_config(config: &ReelscoutConfig) -> Result<Self, MovieSearchError> {
        let provider: Arc<dyn MovieDatabase> = match config.mode {
            RuntimeMode::Production => {
                if !config.omdb.has_api_key() {
                    tracing::warn!("No OMDb API key configured; lookups will report a configuration error");
                }
                Arc::new(OmdbProvider::new(config.omdb.clone())?)
            }
            RuntimeMode::Development => Arc::new(DemoProvider::new()),
        };

        Ok(Self::new(provider))
    }

    /// Search titles for a raw query string.
    ///
    /// # Errors
    /// - `MovieSearchError::EmptyQuery` - query is empty after trimming; no call is made
    /// - any error returned by the provider
    pub async fn search_titles(&self, query: &str) -> Result<Vec<SearchItem>, MovieSearchError> {
        let term = query.trim();
        if term.is_empty() {
            return Err(MovieSearchError::EmptyQuery);
        }

        let items = self.provider.search_titles(term).await?;
        tracing::info!(term, results = items.len(), "search completed");
        Ok(items)
    }

    /// Look up one title by IMDb identifier.
    ///
    /// Missing credentials are reported before the identifier is looked at.
    ///
    /// # Errors
    /// - `MovieSearchError::MissingApiKey` - provider needs a key that is not configured
    /// - `MovieSearchError::NotFound` - identifier is empty after trimming
    /// - any error returned by the provider
    pub async fn lookup_title(&self, imdb_id: &str) -> Result<MovieDetail, MovieSearchError> {
        self.provider.check_credentials()?;

        let imdb_id = imdb_id.trim();
        if imdb_id.is_empty() {
            return Err(MovieSearchError::NotFound { message: None });
        }

        self.provider.lookup_title(imdb_id).await
    }

    /// Runs a search and returns what the results view should render.
    pub async fn search_view(&self, query: &str, sort: SortOrder) -> ViewState<Vec<SearchItem>> {
        match self.search_titles(query).await {
            Ok(items) if items.is_empty() => ViewState::Empty,
            Ok(mut items) => {
                sort.apply(&mut items);
                ViewState::Ready(items)
            }
            Err(err) => {
                tracing::warn!(query, "search failed: {err}");
                ViewState::Failed(ViewError::new(search_error_message(&err, query.trim())))
            }
        }
    }

    /// Runs a lookup and returns what the detail view should render.
    pub async fn detail_view(&self, imdb_id: &str) -> ViewState<MovieDetail> {
        match self.lookup_title(imdb_id).await {
            Ok(detail) => ViewState::Ready(detail),
            Err(err) => {
                tracing::warn!(imdb_id, "lookup failed: {err}");
                ViewState::Failed(ViewError::new(detail_error_message(&err)))
            }
        }
    }
}

/// User-facing message for a failed search of `term`.
pub fn search_error_message(err: &MovieSearchError, term: &str) -> String {
    match err {
        MovieSearchError::EmptyQuery => EMPTY_QUERY_MESSAGE.to_string(),
        MovieSearchError::MissingApiKey => MISSING_API_KEY_MESSAGE.to_string(),
        MovieSearchError::NotFound { message: Some(message) } => message.clone(),
        MovieSearchError::NotFound { message: None } => format!("No movies found for \"{term}\"."),
        MovieSearchError::HttpStatus { .. }
        | MovieSearchError::Network { .. }
        | MovieSearchError::Parse { .. } => format!("Failed to fetch movies: {err}"),
    }
}

/// User-facing message for a failed lookup.
pub fn detail_error_message(err: &MovieSearchError) -> String {
    match err {
        MovieSearchError::MissingApiKey => MISSING_API_KEY_MESSAGE.to_string(),
        MovieSearchError::NotFound { message: Some(message) } => message.clone(),
        MovieSearchError::NotFound { message: None } | MovieSearchError::EmptyQuery => {
            DETAIL_NOT_FOUND_MESSAGE.to_string()
        }
        MovieSearchError::HttpStatus { .. }
        | MovieSearchError::Network { .. }
        | MovieSearchError::Parse { .. } => format!("Failed to fetch movie details: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;

    fn service(mock: &MockProvider) -> MovieSearchService {
        MovieSearchService::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_blank_query_never_reaches_provider() {
        let mock = MockProvider::new().with_search(Ok(vec![]));
        let state = service(&mock).search_view("   ", SortOrder::Relevance).await;

        assert_eq!(state.error_message(), Some(EMPTY_QUERY_MESSAGE));
        assert_eq!(mock.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_results_are_sorted_before_rendering() {
        let mock = MockProvider::new().with_search(Ok(vec![
            MockProvider::sample_item("Zulu", "1964", "tt1"),
            MockProvider::sample_item("Aliens", "1986", "tt2"),
        ]));

        let state = service(&mock).search_view(" zulu ", SortOrder::TitleAsc).await;

        let ViewState::Ready(items) = state else {
            panic!("expected ready results");
        };
        assert_eq!(items[0].title, "Aliens");
        assert_eq!(mock.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_success_is_empty_state() {
        let mock = MockProvider::new().with_search(Ok(vec![]));
        let state = service(&mock).search_view("quiet", SortOrder::Relevance).await;
        assert_eq!(state, ViewState::Empty);
    }

    #[tokio::test]
    async fn test_api_message_is_shown_verbatim() {
        let mock = MockProvider::new().with_search(Err(MovieSearchError::NotFound {
            message: Some("Too many results.".to_string()),
        }));
        let state = service(&mock).search_view("a", SortOrder::Relevance).await;
        assert_eq!(state.error_message(), Some("Too many results."));
    }

    #[test]
    fn test_search_messages() {
        assert_eq!(
            search_error_message(&MovieSearchError::NotFound { message: None }, "Heat"),
            "No movies found for \"Heat\"."
        );
        assert_eq!(
            search_error_message(&MovieSearchError::HttpStatus { status: 500 }, "Heat"),
            "Failed to fetch movies: HTTP error! status: 500"
        );
        assert_eq!(
            search_error_message(&MovieSearchError::MissingApiKey, "Heat"),
            MISSING_API_KEY_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_detail_states() {
        let ready = MockProvider::new().with_lookup(Ok(MockProvider::sample_detail()));
        let state = service(&ready).detail_view("tt0083658").await;
        assert!(matches!(state, ViewState::Ready(ref d) if d.title == "Blade Runner"));

        let missing = MockProvider::new().with_lookup(Err(MovieSearchError::NotFound { message: None }));
        let state = service(&missing).detail_view("tt0083658").await;
        assert_eq!(state.error_message(), Some(DETAIL_NOT_FOUND_MESSAGE));

        let broken = MockProvider::new().with_lookup(Err(MovieSearchError::Network {
            reason: "connection refused".to_string(),
        }));
        let state = service(&broken).detail_view("tt0083658").await;
        assert_eq!(
            state.error_message(),
            Some("Failed to fetch movie details: Network error: connection refused")
        );
    }

    #[tokio::test]
    async fn test_production_without_key_reports_configuration_error() {
        let config = ReelscoutConfig::default();
        let service = MovieSearchService::from_config(&config).unwrap();

        let state = service.detail_view("tt0133093").await;
        assert_eq!(state.error_message(), Some(MISSING_API_KEY_MESSAGE));

        let state = service.detail_view("   ").await;
        assert_eq!(state.error_message(), Some(MISSING_API_KEY_MESSAGE));
    }

    #[tokio::test]
    async fn test_blank_identifier_with_credentials_skips_provider() {
        let mock = MockProvider::new().with_lookup(Ok(MockProvider::sample_detail()));
        let state = service(&mock).detail_view("  ").await;

        assert_eq!(state.error_message(), Some(DETAIL_NOT_FOUND_MESSAGE));
        assert_eq!(mock.lookup_calls(), 0);
    }

    #[tokio::test]
    async fn test_development_mode_uses_demo_catalogue() {
        let config = ReelscoutConfig {
            mode: RuntimeMode::Development,
            ..Default::default()
        };
        let service = MovieSearchService::from_config(&config).unwrap();
        let state = service.search_view("inception", SortOrder::Relevance).await;
        assert!(matches!(state, ViewState::Ready(ref items) if items.len() == 1));
    }
}
