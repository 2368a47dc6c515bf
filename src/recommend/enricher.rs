use std::sync::Arc;

use futures::future::join_all;
use reqwest::Client;
use tracing::warn;

use crate::{
    spotify::{
        auth::TokenProvider,
        search::{LookupError, search_track},
    },
    types::{EnrichedSong, SongRecommendation, TrackMetadata},
    utils,
};

/// How a batch of songs is enriched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrichMode {
    /// One lookup at a time, in list order.
    #[default]
    Sequential,
    /// All lookups at once. Output order still follows input order.
    Parallel,
}

/// Attaches catalog metadata to recommended songs.
///
/// Every lookup fetches a fresh token from the configured [`TokenProvider`]
/// and searches the catalog for `"{title} {artist}"`.
pub struct Enricher {
    client: Client,
    api_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl Enricher {
    pub fn new(client: Client, api_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            tokens,
        }
    }

    /// Enriches a single song. Never fails.
    ///
    /// A failed token fetch or search leaves cover, preview and catalog
    /// link empty. The video-search link is always filled in.
    pub async fn enrich(&self, song: &SongRecommendation) -> EnrichedSong {
        let query = format!("{} {}", song.title, song.artist);

        let meta = match self.lookup(&query).await {
            Ok(meta) => meta,
            Err(e) => {
                warn!(query = %query, "Spotify fetch failed: {}", e);
                TrackMetadata::default()
            }
        };

        EnrichedSong {
            title: song.title.clone(),
            artist: song.artist.clone(),
            reason: song.reason.clone(),
            album_cover_url: meta.album_cover_url,
            preview_audio_url: meta.preview_audio_url,
            catalog_url: meta.catalog_url,
            external_search_url: utils::youtube_search_url(&song.title, &song.artist),
        }
    }

    /// Enriches every song, keeping the input order.
    ///
    /// One failed lookup never affects its siblings.
    pub async fn enrich_all(
        &self,
        songs: &[SongRecommendation],
        mode: EnrichMode,
    ) -> Vec<EnrichedSong> {
        match mode {
            EnrichMode::Sequential => {
                let mut enriched = Vec::with_capacity(songs.len());
                for song in songs {
                    enriched.push(self.enrich(song).await);
                }
                enriched
            }
            EnrichMode::Parallel => join_all(songs.iter().map(|song| self.enrich(song))).await,
        }
    }

    async fn lookup(&self, query: &str) -> Result<TrackMetadata, LookupError> {
        let token = self
            .tokens
            .fetch_catalog_token()
            .await
            .map_err(|e| LookupError::Token(e.to_string()))?;

        search_track(&self.client, &self.api_url, &token, query).await
    }
}
