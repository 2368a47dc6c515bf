use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::{load_config, render};
use crate::{
    Res,
    config::Config,
    error,
    gemini::GeminiClient,
    management::{FileStore, HistoryStore},
    recommend::{EnrichMode, Enricher, MoodPipeline, RecommendationGenerator},
    spotify::auth::{BrokerClient, TokenBroker, TokenProvider},
};

/// Generates, enriches, stores and prints recommendations for `text`.
///
/// With `broker_url` set, catalog tokens come from a running
/// `moodtune serve` instance and the Spotify secret is not needed locally.
pub async fn recommend(text: String, broker_url: Option<String>, parallel: bool) {
    let config = load_config();

    let pipeline = match build_pipeline(&config, broker_url, parallel) {
        Ok(pipeline) => pipeline,
        Err(e) => error!("{}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Analyzing...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = pipeline.run(&text).await;
    pb.finish_and_clear();

    match result {
        Ok(entry) => render::entry(&entry),
        Err(e) => {
            debug!("recommendation failed: {}", e);
            error!("{}", e.user_message())
        }
    }
}

/// Wires the pipeline from configuration.
///
/// All required keys are checked here, before any request is made.
pub fn build_pipeline(
    config: &Config,
    broker_url: Option<String>,
    parallel: bool,
) -> Res<MoodPipeline> {
    let api_key = config.require_gemini_key()?;
    let client = config.http_client()?;

    let tokens: Arc<dyn TokenProvider> = match broker_url {
        Some(url) => Arc::new(BrokerClient::new(client.clone(), url)),
        None => Arc::new(TokenBroker::new(
            client.clone(),
            config.spotify_token_url.clone(),
            config.require_credentials()?,
        )),
    };

    let model = Arc::new(GeminiClient::new(
        client.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
        api_key,
    ));

    let mode = if parallel {
        EnrichMode::Parallel
    } else {
        EnrichMode::Sequential
    };

    Ok(MoodPipeline::new(
        RecommendationGenerator::new(model),
        Enricher::new(client, config.spotify_api_url.clone(), tokens),
        history_store(config),
        mode,
    ))
}

pub fn history_store(config: &Config) -> HistoryStore {
    HistoryStore::new(Arc::new(FileStore::new(config.data_dir.clone())))
}
