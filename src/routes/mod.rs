//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR routes, the compiled WASM/CSS bundle
//! under `/pkg`, and a `/healthz` probe. The chat backend API is a separate
//! service; nothing here proxies it.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Full application router with request tracing and gzip.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, ServerError> {
    Ok(leptos_app()?
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

fn leptos_app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .with_state(leptos_options))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
