//! Data types for movie search and detail views.

use serde::{Deserialize, Serialize};

/// Literal the API uses for "no value", most visibly on posters.
pub const NOT_AVAILABLE: &str = "N/A";

/// One entry of a title search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Display title
    pub title: String,
    /// Release year as reported, e.g. `1999` or `2019–2021`
    pub year: String,
    /// IMDb identifier, e.g. `tt0133093`
    pub imdb_id: String,
    /// Kind of title
    pub media_type: MediaType,
    /// Poster image
    pub poster: Poster,
}

impl SearchItem {
    /// First year of the release span, if the year field starts with one.
    pub fn release_year(&self) -> Option<u16> {
        leading_year(&self.year)
    }
}

/// Full record for a single title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Display title
    pub title: String,
    /// Release year as reported
    pub year: String,
    /// IMDb identifier
    pub imdb_id: String,
    /// Kind of title
    pub media_type: MediaType,
    /// Poster image
    pub poster: Poster,
    /// Content rating, e.g. `PG-13`
    pub rated: String,
    /// Release date
    pub released: String,
    /// Runtime, e.g. `136 min`
    pub runtime: String,
    /// Comma separated genres
    pub genre: String,
    /// Director names
    pub director: String,
    /// Writer names
    pub writer: String,
    /// Main cast
    pub actors: String,
    /// Plot summary
    pub plot: String,
    /// Spoken languages
    pub language: String,
    /// Production countries
    pub country: String,
    /// Awards summary
    pub awards: String,
    /// Ratings from individual sources
    pub ratings: Vec<RatingEntry>,
    /// Metascore, `N/A` when unknown
    pub metascore: String,
    /// IMDb rating out of ten
    pub imdb_rating: String,
    /// IMDb vote count, formatted with separators
    pub imdb_votes: String,
    /// DVD release date
    pub dvd: String,
    /// Box office takings
    pub box_office: String,
    /// Production company
    pub production: String,
    /// Official website
    pub website: String,
}

impl MovieDetail {
    /// Heading shown on the detail view: `Title (Year)`.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }

    /// Metascore, unless the API reported it as unavailable.
    pub fn metascore(&self) -> Option<&str> {
        available(&self.metascore)
    }

    /// Plot summary, unless empty or unavailable.
    pub fn plot(&self) -> Option<&str> {
        available(&self.plot)
    }
}

/// A single `(source, value)` rating pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    /// Rating source, e.g. `Rotten Tomatoes`
    pub source: String,
    /// Rating value as displayed by the source, e.g. `88%`
    pub value: String,
}

/// Poster image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Poster {
    /// Remote image URL
    Url(String),
    /// The API reported no poster
    Missing,
}

impl Poster {
    /// URL of the poster, if there is one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Poster::Url(url) => Some(url),
            Poster::Missing => None,
        }
    }
}

impl From<String> for Poster {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
            Poster::Missing
        } else {
            Poster::Url(trimmed.to_string())
        }
    }
}

impl From<Poster> for String {
    fn from(poster: Poster) -> Self {
        match poster {
            Poster::Url(url) => url,
            Poster::Missing => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Media type classification as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    /// Feature film
    Movie,
    /// TV series
    Series,
    /// Single episode of a series
    Episode,
    /// Video game
    Game,
    /// Anything else, kept verbatim
    Other(String),
}

impl MediaType {
    /// Wire name of the media type.
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
            MediaType::Episode => "episode",
            MediaType::Game => "game",
            MediaType::Other(other) => other,
        }
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "movie" => MediaType::Movie,
            "series" => MediaType::Series,
            "episode" => MediaType::Episode,
            "game" => MediaType::Game,
            _ => MediaType::Other(value),
        }
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.as_str().to_string()
    }
}

/// What a view renders: exactly one of these at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// A request is in flight
    ///
    /// Services never return this; pages show it through the HTMX request
    /// indicator while a fragment is being fetched.
    Loading,
    /// The request finished with a user-facing error
    Failed(ViewError),
    /// The request succeeded but produced nothing to show
    Empty,
    /// The request succeeded
    Ready(T),
}

impl<T> ViewState<T> {
    /// Returns the error message when in the failed state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed(err) => Some(&err.message),
            _ => None,
        }
    }
}

/// User-facing error shown in a view's error panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    /// Message rendered verbatim
    pub message: String,
}

impl ViewError {
    /// Creates a view error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Parses the four-digit year at the start of a year field.
pub fn leading_year(year: &str) -> Option<u16> {
    let digits: String = year.trim().chars().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

fn available(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_sentinel_is_missing() {
        assert_eq!(Poster::from("N/A".to_string()), Poster::Missing);
        assert_eq!(Poster::from(String::new()), Poster::Missing);
        assert_eq!(
            Poster::from("https://img.example/p.jpg".to_string()).url(),
            Some("https://img.example/p.jpg")
        );
        assert_eq!(String::from(Poster::Missing), "N/A");
    }

    #[test]
    fn test_media_type_keeps_unknown_values() {
        assert_eq!(MediaType::from("series".to_string()), MediaType::Series);
        assert_eq!(MediaType::from("Movie".to_string()), MediaType::Movie);
        let other = MediaType::from("podcast".to_string());
        assert_eq!(other.as_str(), "podcast");
    }

    #[test]
    fn test_leading_year_handles_ranges() {
        assert_eq!(leading_year("1999"), Some(1999));
        assert_eq!(leading_year("2019–2021"), Some(2019));
        assert_eq!(leading_year("2022–"), Some(2022));
        assert_eq!(leading_year("N/A"), None);
        assert_eq!(leading_year("99"), None);
    }

    #[test]
    fn test_view_state_accessors() {
        let failed: ViewState<()> = ViewState::Failed(ViewError::new("boom"));
        assert_eq!(failed.error_message(), Some("boom"));
        assert_eq!(ViewState::<()>::Loading.error_message(), None);
    }
}
