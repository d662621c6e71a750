//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module registers the Leptos portfolio page with Axum and serves the
//! static asset directory (profile photo, emoji icons, stylesheet) as the
//! fallback for every other path.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// The `[package.metadata.leptos]` block of this crate's manifest.
/// `LEPTOS_*` env vars override it.
const LEPTOS_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

/// Load Leptos options for SSR.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn leptos_options() -> Result<LeptosOptions, String> {
    let conf = get_configuration(Some(LEPTOS_CONFIG_PATH)).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(conf.leptos_options)
}

/// Portfolio page at `/`, health check, and static assets for everything else.
pub fn app(leptos_options: LeptosOptions, public_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .fallback_service(ServeDir::new(public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
