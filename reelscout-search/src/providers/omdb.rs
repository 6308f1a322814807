//! OMDb API provider.

use async_trait::async_trait;
use reelscout_core::OmdbConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::MovieDatabase;
use crate::errors::MovieSearchError;
use crate::types::{MovieDetail, RatingEntry, SearchItem};

/// Title search and lookup against the OMDb HTTP API.
#[derive(Debug, Clone)]
pub struct OmdbProvider {
    client: reqwest::Client,
    config: OmdbConfig,
}

/// Body of a search (`s=`) response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct OmdbSearchEnvelope {
    /// `"True"` or `"False"`
    #[serde(rename = "Response")]
    pub response: Option<String>,
    /// Matching titles when the response is successful
    #[serde(rename = "Search")]
    pub search: Option<Vec<OmdbSearchItem>>,
    /// Total number of matches across all pages
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    /// Error message when the response is not successful
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// One entry of the `Search` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct OmdbSearchItem {
    /// Title of the media item
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year as string
    #[serde(rename = "Year", default)]
    pub year: String,
    /// IMDb identifier
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Media type (movie, series, etc.)
    #[serde(rename = "Type", default)]
    pub media_type: String,
    /// URL to poster image or `N/A`
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Body of a lookup (`i=`) response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct OmdbDetailEnvelope {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Writer")]
    pub writer: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Ratings")]
    pub ratings: Option<Vec<OmdbRating>>,
    #[serde(rename = "Metascore")]
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    #[serde(rename = "DVD")]
    pub dvd: Option<String>,
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
    #[serde(rename = "Production")]
    pub production: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// One entry of the `Ratings` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct OmdbRating {
    /// Rating source
    #[serde(rename = "Source")]
    pub source: String,
    /// Rating value
    #[serde(rename = "Value")]
    pub value: String,
}

impl OmdbProvider {
    /// Create OMDb provider from injected settings.
    ///
    /// # Errors
    /// - `MovieSearchError::Network` - HTTP client could not be constructed
    pub fn new(config: OmdbConfig) -> Result<Self, MovieSearchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| MovieSearchError::Network {
                reason: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> Result<&str, MovieSearchError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(MovieSearchError::MissingApiKey)
    }

    /// Builds the request URL for one call.
    ///
    /// # Errors
    /// - `MovieSearchError::Parse` - configured base URL is not a valid URL
    pub fn endpoint(&self, params: &[(&str, &str)]) -> Result<Url, MovieSearchError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| MovieSearchError::Parse {
            reason: format!("invalid OMDb base URL '{}': {e}", self.config.base_url),
        })?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, MovieSearchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("OMDb request failed: {e}");
            MovieSearchError::Network {
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("OMDb answered with HTTP {}", status.as_u16());
            return Err(MovieSearchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| MovieSearchError::Parse {
            reason: format!("JSON parsing failed: {e}"),
        })
    }
}

#[async_trait]
impl MovieDatabase for OmdbProvider {
    async fn search_titles(&self, term: &str) -> Result<Vec<SearchItem>, MovieSearchError> {
        let api_key = self.api_key()?;
        let url = self.endpoint(&[("s", term), ("apikey", api_key)])?;

        tracing::debug!(term, "searching OMDb");
        let envelope: OmdbSearchEnvelope = self.fetch_json(url).await?;
        envelope.into_items()
    }

    async fn lookup_title(&self, imdb_id: &str) -> Result<MovieDetail, MovieSearchError> {
        let api_key = self.api_key()?;
        let url = self.endpoint(&[("i", imdb_id), ("apikey", api_key)])?;

        tracing::debug!(imdb_id, "looking up OMDb title");
        let envelope: OmdbDetailEnvelope = self.fetch_json(url).await?;
        envelope.into_detail()
    }

    fn check_credentials(&self) -> Result<(), MovieSearchError> {
        self.api_key().map(|_| ())
    }
}

fn is_success(response: Option<&str>) -> bool {
    response.is_some_and(|r| r.eq_ignore_ascii_case("true"))
}

impl OmdbSearchEnvelope {
    /// Converts a successful envelope into search items.
    ///
    /// # Errors
    /// - `MovieSearchError::NotFound` - envelope reports `Response: "False"`
    pub fn into_items(self) -> Result<Vec<SearchItem>, MovieSearchError> {
        if !is_success(self.response.as_deref()) {
            return Err(MovieSearchError::NotFound { message: self.error });
        }

        Ok(self
            .search
            .unwrap_or_default()
            .into_iter()
            .map(|item| SearchItem {
                title: item.title,
                year: item.year,
                imdb_id: item.imdb_id,
                media_type: item.media_type.into(),
                poster: item.poster.into(),
            })
            .collect())
    }
}

impl OmdbDetailEnvelope {
    /// Converts a successful envelope into a detail record.
    ///
    /// # Errors
    /// - `MovieSearchError::NotFound` - envelope reports `Response: "False"`
    pub fn into_detail(self) -> Result<MovieDetail, MovieSearchError> {
        if !is_success(self.response.as_deref()) {
            return Err(MovieSearchError::NotFound { message: self.error });
        }

        Ok(MovieDetail {
            title: self.title.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            imdb_id: self.imdb_id.unwrap_or_default(),
            media_type: self.media_type.unwrap_or_default().into(),
            poster: self.poster.unwrap_or_default().into(),
            rated: self.rated.unwrap_or_default(),
            released: self.released.unwrap_or_default(),
            runtime: self.runtime.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            director: self.director.unwrap_or_default(),
            writer: self.writer.unwrap_or_default(),
            actors: self.actors.unwrap_or_default(),
            plot: self.plot.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            awards: self.awards.unwrap_or_default(),
            ratings: self
                .ratings
                .unwrap_or_default()
                .into_iter()
                .map(|r| RatingEntry {
                    source: r.source,
                    value: r.value,
                })
                .collect(),
            metascore: self.metascore.unwrap_or_default(),
            imdb_rating: self.imdb_rating.unwrap_or_default(),
            imdb_votes: self.imdb_votes.unwrap_or_default(),
            dvd: self.dvd.unwrap_or_default(),
            box_office: self.box_office.unwrap_or_default(),
            production: self.production.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
        })
    }
}
