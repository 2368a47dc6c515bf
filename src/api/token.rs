use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode};
use tracing::error;

use crate::{
    spotify::auth::TokenProvider,
    types::{ErrorResponse, TokenResponse},
};

/// `GET /spotify-token`
///
/// Answers `{"access_token": "..."}` on success. Any failure of the
/// upstream exchange becomes a 500 with `{"error": "..."}`.
pub async fn spotify_token(
    Extension(broker): Extension<Arc<dyn TokenProvider>>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<ErrorResponse>)> {
    match broker.fetch_catalog_token().await {
        Ok(token) => Ok(Json(TokenResponse {
            access_token: token.as_str().to_string(),
        })),
        Err(e) => {
            error!("Error fetching token: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
