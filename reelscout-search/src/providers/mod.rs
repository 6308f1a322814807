//! Provider implementations for title search and lookup.

use async_trait::async_trait;

use crate::errors::MovieSearchError;
use crate::types::{MovieDetail, SearchItem};

pub mod demo;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod omdb;

pub use demo::DemoProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockProvider;
pub use omdb::OmdbProvider;

/// Trait for movie database backends.
///
/// Implementations answer title searches and single-title lookups
/// (the OMDb API, the offline demo catalogue, canned data for tests).
#[async_trait]
pub trait MovieDatabase: Send + Sync + std::fmt::Debug {
    /// Search titles matching an already trimmed, non-empty term.
    ///
    /// # Errors
    /// - `MovieSearchError::MissingApiKey` - Backend needs a key that is not configured
    /// - `MovieSearchError::HttpStatus` - Backend answered with a non-2xx status
    /// - `MovieSearchError::Network` - Network connectivity issues
    /// - `MovieSearchError::Parse` - Response body could not be decoded
    /// - `MovieSearchError::NotFound` - Backend reported no matches
    async fn search_titles(&self, term: &str) -> Result<Vec<SearchItem>, MovieSearchError>;

    /// Fetch the full record for one IMDb identifier.
    ///
    /// # Errors
    /// Same variants as [`MovieDatabase::search_titles`].
    async fn lookup_title(&self, imdb_id: &str) -> Result<MovieDetail, MovieSearchError>;

    /// Fails when the backend needs credentials that are not configured.
    ///
    /// # Errors
    /// - `MovieSearchError::MissingApiKey` - Backend needs a key that is not configured
    fn check_credentials(&self) -> Result<(), MovieSearchError> {
        Ok(())
    }
}
