//! # API Module
//!
//! HTTP handlers for the local token broker.
//!
//! ## Overview
//!
//! The broker exists to keep the Spotify client secret away from the caller.
//! A front-end asks the broker for a short-lived token and uses that token
//! for catalog searches on its own.
//!
//! ## Endpoints
//!
//! - [`spotify_token`] - `GET /spotify-token`, returns `{ "access_token" }`
//!   or HTTP 500 with `{ "error" }` when the upstream exchange fails.
//!
//! The endpoint is unauthenticated and intended for a same-machine caller.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use moodtune::api::spotify_token;
//!
//! let app = Router::new().route("/spotify-token", get(spotify_token));
//! ```

mod token;

pub use token::spotify_token;
