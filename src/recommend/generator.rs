use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::extract::extract_first_json_object;
use crate::{
    gemini::{ModelError, TextGenerator},
    types::{Recommendation, SongRecommendation},
};

/// Number of songs a valid model answer must contain.
pub const SONG_COUNT: usize = 5;

/// The message shown to the user for any failed recommendation attempt.
pub const RETRY_MESSAGE: &str = "Failed to process mood. Try again!";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("mood text must not be empty")]
    Validation,

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("model request failed: {0}")]
    Upstream(#[from] ModelError),
}

impl GenerateError {
    pub fn user_message(&self) -> &'static str {
        RETRY_MESSAGE
    }
}

/// Turns mood text into a detected mood and five song suggestions.
pub struct RecommendationGenerator {
    model: Arc<dyn TextGenerator>,
}

impl RecommendationGenerator {
    pub fn new(model: Arc<dyn TextGenerator>) -> Self {
        Self { model }
    }

    /// Asks the model for recommendations matching `mood_text`.
    ///
    /// Blank input is rejected with [`GenerateError::Validation`] before
    /// the model is contacted. The answer is parsed with
    /// [`parse_recommendation`].
    pub async fn generate(&self, mood_text: &str) -> Result<Recommendation, GenerateError> {
        if mood_text.trim().is_empty() {
            return Err(GenerateError::Validation);
        }

        let prompt = build_prompt(mood_text);
        let raw = self.model.generate_text(&prompt).await?;
        debug!(len = raw.len(), "model answered");

        parse_recommendation(&raw)
    }
}

/// Builds the fixed instruction sent to the model.
pub fn build_prompt(mood_text: &str) -> String {
    format!(
        r#"
You are a music recommendation AI.

User mood description: "{mood_text}"

Your tasks:
1. Determine the user's mood.
2. Recommend EXACTLY {SONG_COUNT} songs, no more, no less.
3. Each song must include:
   - title
   - artist
   - reason

Return STRICT JSON ONLY. Nothing outside JSON.

Follow this structure exactly:

{{
  "mood": "happy",
  "songs": [
    {{ "title": "Song A", "artist": "Artist A", "reason": "why it fits" }},
    {{ "title": "Song B", "artist": "Artist B", "reason": "why it fits" }},
    {{ "title": "Song C", "artist": "Artist C", "reason": "why it fits" }},
    {{ "title": "Song D", "artist": "Artist D", "reason": "why it fits" }},
    {{ "title": "Song E", "artist": "Artist E", "reason": "why it fits" }}
  ]
}}
"#
    )
}

/// Parses raw model output into a [`Recommendation`].
///
/// The embedded object must carry a non-blank `mood` string and a `songs`
/// array of exactly [`SONG_COUNT`] entries, each with string `title` and
/// `artist` fields. A missing `reason` is accepted as empty. Songs keep the
/// order the model returned them in.
pub fn parse_recommendation(raw: &str) -> Result<Recommendation, GenerateError> {
    let value =
        extract_first_json_object(raw).map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

    let mood = value
        .get("mood")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| GenerateError::MalformedResponse("missing 'mood' string".to_string()))?;

    let songs = value
        .get("songs")
        .and_then(Value::as_array)
        .ok_or_else(|| GenerateError::MalformedResponse("missing 'songs' array".to_string()))?;

    if songs.len() != SONG_COUNT {
        return Err(GenerateError::MalformedResponse(format!(
            "expected {} songs, got {}",
            SONG_COUNT,
            songs.len()
        )));
    }

    let songs = songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            serde_json::from_value::<SongRecommendation>(song.clone()).map_err(|e| {
                GenerateError::MalformedResponse(format!("song {} is invalid: {}", i + 1, e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Recommendation {
        detected_mood: mood.to_string(),
        songs,
    })
}
