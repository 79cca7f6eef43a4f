mod config;
mod errors;
mod export;
mod model_client;
mod profile;
mod rewrite;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::model_client::ModelSettings;
use crate::rewrite::paraphrase::HubParaphraser;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting profile analyzer v{}", env!("CARGO_PKG_VERSION"));

    // The model itself loads lazily on the first advanced rewrite.
    let paraphraser = Arc::new(HubParaphraser::new(ModelSettings {
        hub_url: config.hf_hub_url.clone(),
        inference_url: config.hf_inference_url.clone(),
        api_token: config.hf_api_token.clone(),
    }));
    info!("Paraphraser configured (model: {})", model_client::MODEL);
    info!("Exports will be written to {}", config.export_dir.display());

    let state = AppState {
        config: config.clone(),
        paraphraser,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
