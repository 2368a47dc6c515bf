use reqwest::Client;
use thiserror::Error;

use crate::types::{CatalogToken, SearchResponse, TrackMetadata};

/// Failure of a single catalog lookup.
///
/// Lookup errors are absorbed by the enricher and only ever logged.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("catalog token unavailable: {0}")]
    Token(String),

    #[error("catalog search failed: {0}")]
    Transport(String),

    #[error("catalog search returned status {0}")]
    Status(u16),

    #[error("catalog search response could not be decoded: {0}")]
    Decode(String),

    #[error("no catalog match for '{0}'")]
    NoMatch(String),
}

/// Searches the Spotify catalog for the single best matching track.
///
/// Issues `GET {api_url}/search?q=<query>&type=track&limit=1` with the
/// given bearer token and extracts the first album image, the 30-second
/// preview URL and the canonical web URL of the first hit. Missing fields
/// on a found track become empty strings.
///
/// # Errors
///
/// Returns a [`LookupError`] for transport failures, non-2xx responses,
/// undecodable bodies and empty result lists.
///
/// # Example
///
/// ```
/// let meta = search_track(&client, "https://api.spotify.com/v1", &token, "Yellow Coldplay").await?;
/// println!("{}", meta.catalog_url);
/// ```
pub async fn search_track(
    client: &Client,
    api_url: &str,
    token: &CatalogToken,
    query: &str,
) -> Result<TrackMetadata, LookupError> {
    let url = format!("{}/search", api_url.trim_end_matches('/'));

    let res = client
        .get(&url)
        .query(&[("q", query), ("type", "track"), ("limit", "1")])
        .bearer_auth(token.as_str())
        .send()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }

    let body: SearchResponse = res
        .json()
        .await
        .map_err(|e| LookupError::Decode(e.to_string()))?;

    let track = body
        .tracks
        .and_then(|tracks| tracks.items.into_iter().next())
        .ok_or_else(|| LookupError::NoMatch(query.to_string()))?;

    Ok(TrackMetadata {
        album_cover_url: track
            .album
            .and_then(|album| album.images.into_iter().next())
            .map(|image| image.url)
            .unwrap_or_default(),
        preview_audio_url: track.preview_url.unwrap_or_default(),
        catalog_url: track
            .external_urls
            .and_then(|urls| urls.spotify)
            .unwrap_or_default(),
    })
}
