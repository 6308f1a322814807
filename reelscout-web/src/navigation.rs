//! URL construction for moving between views.

use reelscout_search::SortOrder;

/// Target of a search submission, or `None` when the term is blank.
///
/// The term is trimmed and percent-encoded into the `query` parameter.
pub fn search_location(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!("/search?query={}", urlencoding::encode(term)))
}

/// Results URL including a sort order; the default order is left out.
pub fn results_location(term: &str, sort: SortOrder) -> String {
    let base = format!("/search?query={}", urlencoding::encode(term.trim()));
    match sort {
        SortOrder::Relevance => base,
        other => format!("{base}&sort={}", other.as_param()),
    }
}

/// Detail view URL for one title.
pub fn movie_location(imdb_id: &str) -> String {
    format!("/movies/{}", urlencoding::encode(imdb_id))
}
