mod models;
mod handlers;
mod services;
mod middleware;
mod config;
mod errors;
mod state;
mod routes;


use anyhow::Context;
use tracing_subscriber::EnvFilter;
use crate::{
    config::Config,
    services::TokenSigner,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    if config.uses_default_secret() {
        tracing::warn!("APP_SECRET is not set; tokens are signed with the default secret");
    }
    if config.auth.allow_bootstrap {
        tracing::info!("First-user bootstrap registration is enabled");
    }

    let store = services::connect(&config.database).context("Failed to open document store")?;
    let signer = TokenSigner::new(&config.auth.secret).context("Invalid server secret")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = routes::build_router(AppState::new(store, signer, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
