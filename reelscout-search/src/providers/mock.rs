//! Mock provider implementation for testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::MovieDatabase;
use crate::errors::MovieSearchError;
use crate::types::{MediaType, MovieDetail, Poster, RatingEntry, SearchItem};

/// Mock provider returning canned answers and counting calls.
#[derive(Debug, Clone)]
pub struct MockProvider {
    search_answer: Result<Vec<SearchItem>, MovieSearchError>,
    lookup_answer: Result<MovieDetail, MovieSearchError>,
    search_calls: Arc<AtomicUsize>,
    lookup_calls: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Creates a mock that answers every call with "not found".
    pub fn new() -> Self {
        Self {
            search_answer: Err(MovieSearchError::NotFound { message: None }),
            lookup_answer: Err(MovieSearchError::NotFound { message: None }),
            search_calls: Arc::default(),
            lookup_calls: Arc::default(),
        }
    }

    /// Sets the answer for title searches.
    pub fn with_search(mut self, answer: Result<Vec<SearchItem>, MovieSearchError>) -> Self {
        self.search_answer = answer;
        self
    }

    /// Sets the answer for lookups.
    pub fn with_lookup(mut self, answer: Result<MovieDetail, MovieSearchError>) -> Self {
        self.lookup_answer = answer;
        self
    }

    /// Number of searches received so far.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of lookups received so far.
    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    /// A search item with a poster URL derived from its identifier.
    pub fn sample_item(title: &str, year: &str, imdb_id: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            year: year.to_string(),
            imdb_id: imdb_id.to_string(),
            media_type: MediaType::Movie,
            poster: Poster::Url(format!("https://img.example/{imdb_id}.jpg")),
        }
    }

    /// A complete detail record with three ratings.
    pub fn sample_detail() -> MovieDetail {
        let rating = |source: &str, value: &str| RatingEntry {
            source: source.to_string(),
            value: value.to_string(),
        };

        MovieDetail {
            title: "Blade Runner".to_string(),
            year: "1982".to_string(),
            imdb_id: "tt0083658".to_string(),
            media_type: MediaType::Movie,
            poster: Poster::Url("https://img.example/tt0083658.jpg".to_string()),
            rated: "R".to_string(),
            released: "25 Jun 1982".to_string(),
            runtime: "117 min".to_string(),
            genre: "Action, Drama, Sci-Fi".to_string(),
            director: "Ridley Scott".to_string(),
            writer: "Hampton Fancher, David Webb Peoples, Philip K. Dick".to_string(),
            actors: "Harrison Ford, Rutger Hauer, Sean Young".to_string(),
            plot: "A blade runner must pursue and terminate four replicants.".to_string(),
            language: "English, German, Cantonese, Japanese, Hungarian, Arabic, Korean".to_string(),
            country: "United States".to_string(),
            awards: "Nominated for 2 Oscars. 13 wins & 21 nominations total".to_string(),
            ratings: vec![
                rating("Internet Movie Database", "8.1/10"),
                rating("Rotten Tomatoes", "89%"),
                rating("Metacritic", "84/100"),
            ],
            metascore: "84".to_string(),
            imdb_rating: "8.1".to_string(),
            imdb_votes: "841,523".to_string(),
            dvd: "N/A".to_string(),
            box_office: "$32,914,489".to_string(),
            production: "N/A".to_string(),
            website: "N/A".to_string(),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieDatabase for MockProvider {
    async fn search_titles(&self, _term: &str) -> Result<Vec<SearchItem>, MovieSearchError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search_answer.clone()
    }

    async fn lookup_title(&self, _imdb_id: &str) -> Result<MovieDetail, MovieSearchError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.lookup_answer.clone()
    }
}
