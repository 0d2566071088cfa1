mod auth;
mod config;
mod db;
mod engine;
mod errors;
mod llm_client;
mod models;
mod ratelimit;
mod routes;
mod state;
mod validation;

use std::net::SocketAddr;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerLoom API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;

    let port = config.port;
    let state = AppState::new(db, config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Tracing targets use the underscored crate name, not the hyphenated
/// package name.
fn default_log_directive(rust_log: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), rust_log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directive_matches_module_path() {
        let directive = default_log_directive("info");
        assert_eq!(directive, "careerloom_api=info");
        assert!(!directive.contains('-'));
    }
}
