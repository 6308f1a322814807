//! Reusable HTML components for HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments shared by full pages and
//! HTMX partial responses. Every value that came from a user or the API is
//! escaped before it is interpolated.

pub mod layout;
pub mod movie;

// Re-export main component functions
pub use layout::{
    card, error_panel, escape_html, loading_indicator, nav_bar, page_header, render_page,
    search_form,
};
pub use movie::{movie_card, movie_detail, poster_image, results_grid, results_header};
