use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{Res, api, spotify::auth::TokenProvider};

/// Builds the broker router. `/spotify-token` is the only route.
pub fn router(broker: Arc<dyn TokenProvider>) -> Router {
    Router::new()
        .route("/spotify-token", get(api::spotify_token))
        .layer(Extension(broker))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn start_api_server(broker: Arc<dyn TokenProvider>, address: &str) -> Res<()> {
    let addr = SocketAddr::from_str(address)
        .map_err(|e| format!("Failed to parse server address '{}': {}", address, e))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    info!("Backend running on http://{}", addr);
    axum::serve(listener, router(broker)).await?;
    Ok(())
}
