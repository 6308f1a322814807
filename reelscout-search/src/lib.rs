//! Reelscout Search - movie search and detail lookup

#![warn(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Wraps the OMDb title search and lookup endpoints behind a provider trait,
//! and turns each call into the loading/error/empty/ready state a view renders.

pub mod errors;
pub mod providers;
pub mod service;
pub mod sort;
pub mod types;

// Re-export main types
pub use errors::MovieSearchError;
pub use providers::{DemoProvider, MovieDatabase, OmdbProvider};
pub use service::MovieSearchService;
pub use sort::SortOrder;
pub use types::{MediaType, MovieDetail, Poster, RatingEntry, SearchItem, ViewError, ViewState};

/// Convenience type alias for Results with MovieSearchError.
pub type Result<T> = std::result::Result<T, MovieSearchError>;
