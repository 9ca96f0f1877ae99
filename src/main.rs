//! Baby Chat host: serves the server-rendered Leptos app and its static assets.
#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "babychat failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "babychat listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
