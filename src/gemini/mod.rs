//! Generative-language model access.
//!
//! The recommender only needs "prompt in, text out", so the model is hidden
//! behind the [`TextGenerator`] trait. [`GeminiClient`] talks to the Gemini
//! `generateContent` endpoint; tests substitute their own implementation.

mod client;

use async_trait::async_trait;
use thiserror::Error;

pub use client::GeminiClient;

/// Errors that can occur when calling the model provider.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends the prompt and returns the raw response text.
    async fn generate_text(&self, prompt: &str) -> Result<String, ModelError>;
}
