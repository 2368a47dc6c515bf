use chrono::Utc;
use tracing::{info, warn};

use super::{
    enricher::{EnrichMode, Enricher},
    generator::{GenerateError, RecommendationGenerator},
};
use crate::{management::HistoryStore, types::HistoryEntry, utils};

/// The full mood-to-music flow: generate, enrich, persist.
pub struct MoodPipeline {
    generator: RecommendationGenerator,
    enricher: Enricher,
    history: HistoryStore,
    mode: EnrichMode,
}

impl MoodPipeline {
    pub fn new(
        generator: RecommendationGenerator,
        enricher: Enricher,
        history: HistoryStore,
        mode: EnrichMode,
    ) -> Self {
        Self {
            generator,
            enricher,
            history,
            mode,
        }
    }

    /// Runs one recommendation attempt for `mood_text`.
    ///
    /// Generation errors abort the attempt. Enrichment cannot fail. A
    /// history write failure is logged and the entry is still returned.
    pub async fn run(&self, mood_text: &str) -> Result<HistoryEntry, GenerateError> {
        let recommendation = self.generator.generate(mood_text).await?;
        info!(
            mood = %recommendation.detected_mood,
            songs = recommendation.songs.len(),
            "recommendations generated"
        );

        let songs = self
            .enricher
            .enrich_all(&recommendation.songs, self.mode)
            .await;

        let entry = HistoryEntry {
            detected_mood: recommendation.detected_mood,
            songs,
            original_text: mood_text.to_string(),
            timestamp: utils::iso_timestamp(Utc::now()),
        };

        if let Err(e) = self.history.append_entry(&entry).await {
            warn!("Failed to save history entry: {}", e);
        }

        Ok(entry)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}
