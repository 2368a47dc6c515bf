#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::get,
};
use moodtune::{
    gemini::{ModelError, TextGenerator},
    spotify::auth::{AuthError, TokenProvider},
    types::CatalogToken,
};
use serde_json::json;

pub const TEST_TOKEN: &str = "test-token";

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Model double that returns a canned reply and records its prompts.
pub struct FakeModel {
    reply: Option<String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl FakeModel {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn offline() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeModel {
    async fn generate_text(&self, prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| ModelError::Connection("connection refused".to_string()))
    }
}

/// Token provider double: a fixed token, or a rejection.
pub struct StaticTokens {
    token: Option<String>,
    calls: AtomicUsize,
}

impl StaticTokens {
    pub fn ok() -> Self {
        Self {
            token: Some(TEST_TOKEN.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            token: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for StaticTokens {
    async fn fetch_catalog_token(&self) -> Result<CatalogToken, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.token {
            Some(token) => Ok(CatalogToken::new(token.clone())),
            None => Err(AuthError::Rejected {
                status: 401,
                message: "invalid_client".to_string(),
            }),
        }
    }
}

/// A five-song model answer wrapped in prose.
pub fn model_reply(mood: &str, titles: &[&str]) -> String {
    let songs: Vec<_> = titles
        .iter()
        .map(|t| json!({"title": t, "artist": format!("{} Band", t), "reason": "fits"}))
        .collect();
    format!(
        "Sure! {}  Hope that helps.",
        json!({"mood": mood, "songs": songs})
    )
}

pub const FIVE_TITLES: [&str; 5] = ["Alpha", "Bravo", "Charlie", "Delta", "Echo"];

/// Fake catalog search endpoint.
///
/// Queries starting with "Missing" match nothing, "Broken" answers 500,
/// "Bare" returns a track without preview or images, and "Slow" is delayed.
/// Requests without the test bearer token get 401.
pub fn catalog_router() -> Router {
    Router::new().route("/search", get(search))
}

async fn search(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": {"status": 401}}))).into_response();
    }

    if params.get("type").map(String::as_str) != Some("track")
        || params.get("limit").map(String::as_str) != Some("1")
    {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "bad query"}))).into_response();
    }

    let q = params.get("q").cloned().unwrap_or_default();

    if q.starts_with("Slow") {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    if q.starts_with("Missing") {
        return Json(json!({"tracks": {"items": []}})).into_response();
    }

    if q.starts_with("Broken") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    if q.starts_with("Bare") {
        return Json(json!({"tracks": {"items": [{
            "album": {"images": []},
            "preview_url": null,
            "external_urls": {"spotify": format!("https://open.spotify.com/track/{}", q.len())}
        }]}}))
        .into_response();
    }

    Json(json!({"tracks": {"items": [{
        "album": {"images": [
            {"url": format!("https://img.test/{}/640", q)},
            {"url": format!("https://img.test/{}/300", q)}
        ]},
        "preview_url": format!("https://preview.test/{}", q),
        "external_urls": {"spotify": format!("https://open.spotify.com/search/{}", q)}
    }]}}))
    .into_response()
}
