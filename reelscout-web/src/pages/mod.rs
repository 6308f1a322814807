//! Full page handlers using the component system
//!
//! Each view is a thin handler: read parameters, ask the search service for
//! a view state, render it inside the shared layout.

pub mod detail;
pub mod landing;
pub mod results;

// Re-export page handlers
pub use detail::movie_page;
pub use landing::{SearchForm, landing_page, submit_search};
pub use results::{ResultsQuery, results_fragment, results_page};
