use std::sync::Arc;

use super::load_config;
use crate::{
    error, info, server,
    spotify::auth::{CredentialSource, TokenBroker, TokenProvider},
};

/// Runs the token broker until the process is stopped.
pub async fn serve(address: Option<String>) {
    let config = load_config();

    if let Err(e) = config.require_credentials() {
        error!("{}", e);
    }

    let client = match config.http_client() {
        Ok(client) => client,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    // Credentials are re-read from the environment on every request.
    let broker: Arc<dyn TokenProvider> = Arc::new(TokenBroker::with_source(
        client,
        config.spotify_token_url.clone(),
        CredentialSource::env(),
    ));

    let address = address.unwrap_or_else(|| config.server_address.clone());
    info!("Token broker listening on http://{}/spotify-token", address);

    if let Err(e) = server::start_api_server(broker, &address).await {
        error!("{}", e);
    }
}
