//! Reelscout Web - server-rendered movie search front-end

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Landing, results and detail views rendered as HTML, HTMX fragments for
//! in-page refreshes, and a small JSON API over the same search service.

pub mod components;
pub mod handlers;
pub mod navigation;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, WebError, build_router, run_server};
