use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    config::{ConfigError, Credentials},
    types::{CatalogToken, ErrorResponse, TokenResponse},
};

/// Failure to obtain a catalog token.
///
/// The message never contains the client secret; it carries the upstream
/// status and error body, or the transport error.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(String),

    #[error("token request rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("token response did not contain an access token")]
    MissingToken,

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Anything that can hand out a fresh catalog token.
///
/// Implemented by the in-process [`TokenBroker`] and by [`BrokerClient`],
/// which asks a running broker over HTTP. Neither implementation caches the
/// token between calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn fetch_catalog_token(&self) -> Result<CatalogToken, AuthError>;
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Where a [`TokenBroker`] gets the application credentials.
pub enum CredentialSource {
    /// Credentials captured once.
    Fixed(Credentials),
    /// Credentials read through the lookup on every token request.
    Lookup(Lookup),
}

impl CredentialSource {
    /// Reads `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` from the process
    /// environment at call time.
    pub fn env() -> Self {
        Self::Lookup(Box::new(|key: &str| std::env::var(key).ok()))
    }

    fn resolve(&self) -> Result<Credentials, ConfigError> {
        match self {
            Self::Fixed(credentials) => Ok(credentials.clone()),
            Self::Lookup(lookup) => Credentials::from_lookup(|key: &str| lookup(key)),
        }
    }
}

/// Exchanges the application credentials for a bearer token using the
/// OAuth 2.0 client-credentials grant.
///
/// One request is issued to the token endpoint per call. No state is kept
/// between calls.
pub struct TokenBroker {
    client: Client,
    token_url: String,
    source: CredentialSource,
}

impl TokenBroker {
    pub fn new(client: Client, token_url: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_source(client, token_url, CredentialSource::Fixed(credentials))
    }

    pub fn with_source(
        client: Client,
        token_url: impl Into<String>,
        source: CredentialSource,
    ) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            source,
        }
    }
}

fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

#[async_trait]
impl TokenProvider for TokenBroker {
    /// Requests a new access token from the Spotify accounts service.
    ///
    /// # Request
    ///
    /// `POST` to the configured token URL with the form body
    /// `grant_type=client_credentials` and an
    /// `Authorization: Basic base64(client_id:client_secret)` header.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Transport`] for network failures and timeouts
    /// - [`AuthError::Rejected`] for any non-2xx response
    /// - [`AuthError::MissingToken`] when the body has no `access_token` string
    /// - [`AuthError::Config`] when the credentials cannot be resolved
    async fn fetch_catalog_token(&self) -> Result<CatalogToken, AuthError> {
        let credentials = self.source.resolve()?;
        debug!(url = %self.token_url, "requesting client-credentials token");

        let res = self
            .client
            .post(&self.token_url)
            .header(AUTHORIZATION, basic_auth_header(&credentials))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.without_url().to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "token endpoint rejected the request");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: upstream_message(&message),
            });
        }

        let json: Value = res
            .json()
            .await
            .map_err(|e| AuthError::Transport(e.without_url().to_string()))?;

        json["access_token"]
            .as_str()
            .filter(|t| !t.is_empty())
            .map(CatalogToken::new)
            .ok_or(AuthError::MissingToken)
    }
}

/// Fetches tokens from a running broker's `GET /spotify-token` route.
///
/// This is the client side of the broker: it never sees the application
/// credentials. Any non-2xx answer is reported as [`AuthError::Rejected`]
/// with the broker's `error` field as message.
pub struct BrokerClient {
    client: Client,
    broker_url: String,
}

impl BrokerClient {
    pub fn new(client: Client, broker_url: impl Into<String>) -> Self {
        Self {
            client,
            broker_url: broker_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TokenProvider for BrokerClient {
    async fn fetch_catalog_token(&self) -> Result<CatalogToken, AuthError> {
        let url = format!("{}/spotify-token", self.broker_url);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let message = match res.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: TokenResponse = res
            .json()
            .await
            .map_err(|_| AuthError::MissingToken)?;
        if body.access_token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        Ok(CatalogToken::new(body.access_token))
    }
}

// Spotify answers `{"error":"invalid_client","error_description":"..."}`.
fn upstream_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json["error_description"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .or_else(|| json["error"]["message"].as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) if body.is_empty() => "empty response".to_string(),
        Err(_) => body.to_string(),
    }
}
