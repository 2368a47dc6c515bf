//! # Spotify Integration Module
//!
//! This module is the integration layer between the recommender and the
//! Spotify Web API. It covers exactly the two calls the application needs:
//! obtaining an application token and searching the track catalog.
//!
//! ## Architecture
//!
//! ```text
//! Recommendation Layer (Enricher)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials token broker)
//!     └── Search (best-match track lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant:
//! - **Token Broker**: exchanges the client id and secret for a bearer token
//! - **Broker Client**: fetches tokens from a running broker over HTTP, so the
//!   caller never holds the client secret
//! - **No Caching**: every call produces a fresh token
//!
//! ### Search Module
//!
//! [`search`] - Looks up the best matching track for a free-text query and
//! extracts cover art, preview audio and the canonical web link.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /search` - Track search limited to one result
//!
//! ## Error Handling
//!
//! - **Token errors** ([`auth::AuthError`]) are surfaced to the caller; the
//!   HTTP surface maps them to a 500 with an `error` body.
//! - **Lookup errors** ([`search::LookupError`]) never leave the enricher;
//!   the affected song simply has empty catalog fields.
//! - No retries are performed. Every request is bounded by the timeout of
//!   the shared `reqwest::Client`.
//!
//! ## Security Considerations
//!
//! - The running broker reads the client secret from the environment on
//!   each token request and only ever sends it to the token endpoint.
//! - Tokens and credentials redact themselves in `Debug` output.

pub mod auth;
pub mod search;
