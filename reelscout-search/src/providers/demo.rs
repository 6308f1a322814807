//! Offline demo catalogue for development mode.

use async_trait::async_trait;

use super::MovieDatabase;
use crate::errors::MovieSearchError;
use crate::types::{MediaType, MovieDetail, Poster, RatingEntry, SearchItem};

/// Demo provider for development without an API key.
///
/// Answers from a small built-in catalogue and mirrors the API's own
/// "not found" messages so the error views can be exercised offline.
#[derive(Debug, Clone)]
pub struct DemoProvider {
    catalogue: Vec<MovieDetail>,
}

struct DemoTitle {
    title: &'static str,
    year: &'static str,
    imdb_id: &'static str,
    media_type: MediaType,
    genre: &'static str,
    director: &'static str,
    actors: &'static str,
    runtime: &'static str,
    imdb_rating: &'static str,
    plot: &'static str,
}

impl DemoProvider {
    /// Creates the provider with the built-in catalogue.
    pub fn new() -> Self {
        let titles = [
            DemoTitle {
                title: "The Matrix",
                year: "1999",
                imdb_id: "tt0133093",
                media_type: MediaType::Movie,
                genre: "Action, Sci-Fi",
                director: "Lana Wachowski, Lilly Wachowski",
                actors: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
                runtime: "136 min",
                imdb_rating: "8.7",
                plot: "A computer hacker learns the world he lives in is a simulation.",
            },
            DemoTitle {
                title: "The Matrix Reloaded",
                year: "2003",
                imdb_id: "tt0234215",
                media_type: MediaType::Movie,
                genre: "Action, Sci-Fi",
                director: "Lana Wachowski, Lilly Wachowski",
                actors: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
                runtime: "138 min",
                imdb_rating: "7.2",
                plot: "Neo and the rebels race to defend Zion against the machines.",
            },
            DemoTitle {
                title: "Inception",
                year: "2010",
                imdb_id: "tt1375666",
                media_type: MediaType::Movie,
                genre: "Action, Adventure, Sci-Fi",
                director: "Christopher Nolan",
                actors: "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
                runtime: "148 min",
                imdb_rating: "8.8",
                plot: "A thief who steals secrets through dreams is offered a chance at redemption.",
            },
            DemoTitle {
                title: "Interstellar",
                year: "2014",
                imdb_id: "tt0816692",
                media_type: MediaType::Movie,
                genre: "Adventure, Drama, Sci-Fi",
                director: "Christopher Nolan",
                actors: "Matthew McConaughey, Anne Hathaway, Jessica Chastain",
                runtime: "169 min",
                imdb_rating: "8.7",
                plot: "Explorers travel through a wormhole in search of a new home for humanity.",
            },
            DemoTitle {
                title: "Arrival",
                year: "2016",
                imdb_id: "tt2543164",
                media_type: MediaType::Movie,
                genre: "Drama, Mystery, Sci-Fi",
                director: "Denis Villeneuve",
                actors: "Amy Adams, Jeremy Renner, Forest Whitaker",
                runtime: "116 min",
                imdb_rating: "7.9",
                plot: "A linguist works to communicate with visitors from another world.",
            },
            DemoTitle {
                title: "Dark",
                year: "2017–2020",
                imdb_id: "tt5753856",
                media_type: MediaType::Series,
                genre: "Crime, Drama, Mystery",
                director: "N/A",
                actors: "Louis Hofmann, Karoline Eichhorn, Lisa Vicari",
                runtime: "60 min",
                imdb_rating: "8.7",
                plot: "A missing child sets four families on a hunt across generations.",
            },
        ];

        Self {
            catalogue: titles.into_iter().map(DemoTitle::into_detail).collect(),
        }
    }
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoTitle {
    fn into_detail(self) -> MovieDetail {
        MovieDetail {
            title: self.title.to_string(),
            year: self.year.to_string(),
            imdb_id: self.imdb_id.to_string(),
            media_type: self.media_type,
            poster: Poster::Missing,
            rated: "PG-13".to_string(),
            released: "N/A".to_string(),
            runtime: self.runtime.to_string(),
            genre: self.genre.to_string(),
            director: self.director.to_string(),
            writer: "N/A".to_string(),
            actors: self.actors.to_string(),
            plot: self.plot.to_string(),
            language: "English".to_string(),
            country: "N/A".to_string(),
            awards: "N/A".to_string(),
            ratings: vec![RatingEntry {
                source: "Internet Movie Database".to_string(),
                value: format!("{}/10", self.imdb_rating),
            }],
            metascore: "N/A".to_string(),
            imdb_rating: self.imdb_rating.to_string(),
            imdb_votes: "N/A".to_string(),
            dvd: "N/A".to_string(),
            box_office: "N/A".to_string(),
            production: "N/A".to_string(),
            website: "N/A".to_string(),
        }
    }
}

#[async_trait]
impl MovieDatabase for DemoProvider {
    async fn search_titles(&self, term: &str) -> Result<Vec<SearchItem>, MovieSearchError> {
        let needle = term.to_lowercase();
        let items: Vec<SearchItem> = self
            .catalogue
            .iter()
            .filter(|detail| detail.title.to_lowercase().contains(&needle))
            .map(|detail| SearchItem {
                title: detail.title.clone(),
                year: detail.year.clone(),
                imdb_id: detail.imdb_id.clone(),
                media_type: detail.media_type.clone(),
                poster: detail.poster.clone(),
            })
            .collect();

        if items.is_empty() {
            return Err(MovieSearchError::NotFound {
                message: Some("Movie not found!".to_string()),
            });
        }

        Ok(items)
    }

    async fn lookup_title(&self, imdb_id: &str) -> Result<MovieDetail, MovieSearchError> {
        self.catalogue
            .iter()
            .find(|detail| detail.imdb_id == imdb_id)
            .cloned()
            .ok_or_else(|| MovieSearchError::NotFound {
                message: Some("Incorrect IMDb ID.".to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_matches_substring_case_insensitively() {
        let provider = DemoProvider::new();
        let items = provider.search_titles("MATRIX").await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.title.contains("Matrix")));
    }

    #[tokio::test]
    async fn test_unknown_titles_mirror_api_messages() {
        let provider = DemoProvider::new();
        assert_eq!(
            provider.search_titles("zzzz").await.unwrap_err(),
            MovieSearchError::NotFound {
                message: Some("Movie not found!".to_string())
            }
        );
        assert!(provider.lookup_title("tt0000000").await.is_err());
    }

    #[tokio::test]
    async fn test_lookup_returns_catalogue_record() {
        let detail = DemoProvider::new().lookup_title("tt5753856").await.unwrap();
        assert_eq!(detail.heading(), "Dark (2017–2020)");
        assert_eq!(detail.media_type, MediaType::Series);
        assert_eq!(detail.ratings.len(), 1);
    }
}
