use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api, config, info};

pub async fn start_api_server() -> Res<()> {
    // Read every required variable before accepting traffic, so a missing
    // one stops the server at boot instead of surfacing inside a handler.
    let addr = SocketAddr::from_str(&config::server_addr())?;
    let api_url = config::spotify_apiurl();

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/playlist/spotify-migrate", post(api::migrate))
        .route("/playlist/spotify-export", post(api::export));

    info!("Spotify API base: {}", api_url);
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
