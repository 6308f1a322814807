//! JSON API and operational handlers

pub mod api;

pub use api::{api_movie, api_search, health};
