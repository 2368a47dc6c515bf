//! # Recommendation Module
//!
//! The mood-to-recommendation flow, split into independently testable steps:
//!
//! ```text
//! mood text
//!     ↓
//! RecommendationGenerator  (model call + JSON extraction)
//!     ↓ five songs
//! Enricher                 (token + catalog search per song)
//!     ↓ five enriched songs
//! HistoryStore             (prepend entry, rewrite list)
//! ```
//!
//! [`MoodPipeline`] wires the steps together. [`extract_first_json_object`]
//! is a pure function and does not depend on any network call.

mod enricher;
mod extract;
mod generator;
mod pipeline;

pub use enricher::{EnrichMode, Enricher};
pub use extract::{ExtractError, extract_first_json_object};
pub use generator::{
    GenerateError, RETRY_MESSAGE, RecommendationGenerator, SONG_COUNT, build_prompt,
    parse_recommendation,
};
pub use pipeline::MoodPipeline;
