use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A song suggested by the generative model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecommendation {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub reason: String,
}

/// The parsed answer of the generative model for one mood query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub detected_mood: String,
    pub songs: Vec<SongRecommendation>,
}

/// A recommendation enriched with catalog metadata.
///
/// The catalog fields are best-effort: an empty string means the lookup did
/// not produce a value. `external_search_url` is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedSong {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub reason: String,
    #[serde(rename = "albumCover", default)]
    pub album_cover_url: String,
    #[serde(rename = "previewUrl", default)]
    pub preview_audio_url: String,
    #[serde(rename = "spotifyUrl", default)]
    pub catalog_url: String,
    #[serde(rename = "youtubeUrl", default)]
    pub external_search_url: String,
}

/// One persisted mood query together with its enriched songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "mood")]
    pub detected_mood: String,
    pub songs: Vec<EnrichedSong>,
    #[serde(rename = "text")]
    pub original_text: String,
    #[serde(rename = "date")]
    pub timestamp: String,
}

/// Catalog metadata for the best matching track of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub album_cover_url: String,
    pub preview_audio_url: String,
    pub catalog_url: String,
}

/// Short-lived bearer token for the Spotify Web API.
#[derive(Clone, PartialEq, Eq)]
pub struct CatalogToken(String);

impl CatalogToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CatalogToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CatalogToken(<redacted>)")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<SearchTracks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTracks {
    #[serde(default)]
    pub items: Vec<SearchTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTrack {
    pub album: Option<SearchAlbum>,
    pub preview_url: Option<String>,
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchAlbum {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Tabled)]
pub struct HistoryTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub date: String,
    pub mood: String,
    pub text: String,
}
