use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use reqwest::Client;

use crate::{
    Res, api,
    color::{ArtworkColorExtractor, ColorExtractor},
    config::Config,
    info,
    management::SessionStore,
    spotify::OAuthClient,
};

/// Shared handles every request needs. Per-user data lives in `sessions`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
    pub oauth: OAuthClient,
    pub sessions: SessionStore,
    pub extractor: Arc<dyn ColorExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http = Client::new();
        let extractor = Arc::new(ArtworkColorExtractor::new(http.clone()));
        Self::with_extractor(config, http, extractor)
    }

    pub fn with_extractor(
        config: Config,
        http: Client,
        extractor: Arc<dyn ColorExtractor>,
    ) -> Self {
        AppState {
            oauth: OAuthClient::new(&config, http.clone()),
            config: Arc::new(config),
            http,
            sessions: SessionStore::new(),
            extractor,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::login))
        .route("/redirect", get(api::redirect))
        .route("/artify", get(api::artify))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

pub async fn start_api_server(state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(&state.config.server_address)
        .map_err(|e| format!("Failed to parse server address: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
