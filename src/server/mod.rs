//! Inbound HTTP surface.
//!
//! Thin plumbing around the resolution chains: routing, CORS, client-IP
//! extraction, static front-end serving, and the JSON error contract. All
//! decision logic lives in [`crate::resolve`] and [`crate::providers`].

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::http::{header, Method, StatusCode};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::config::{Config, GeoFallback};
use crate::error_handling::InitializationError;
use crate::initialization::init_client;
use crate::models::{GeoInfo, ServerStatus};
use crate::providers::self_ip::SelfIpDiscovery;
use crate::providers::{geo, mc};
use crate::resolve::FallbackChain;

mod client_ip;
mod frontend;
mod handlers;

pub use client_ip::client_ip;

/// Shared, read-only application state. One instance serves every request;
/// the only mutation anywhere is the chains' atomic counters.
pub struct AppState {
    /// Outbound HTTP client shared by all adapters.
    pub client: reqwest::Client,
    /// Geolocation fallback chain.
    pub geo: FallbackChain<GeoInfo>,
    /// Minecraft status fallback chain.
    pub mc: FallbackChain<ServerStatus>,
    /// One-shot public-IP discovery client.
    pub self_ip: SelfIpDiscovery,
    /// Server queried when a status request names none.
    pub default_server: String,
    /// Process start, for the `/status` uptime report.
    pub started_at: Instant,
}

impl AppState {
    /// Builds the state from configuration: the shared client plus one chain
    /// per resolution kind, with the provider lists fixed here at startup.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let geo_providers = match config.geo_fallback {
            GeoFallback::Full => geo::default_providers(),
            GeoFallback::PrimaryOnly => geo::primary_provider(),
        };
        Ok(Self {
            client: init_client()?,
            geo: FallbackChain::new(
                "geolocation",
                geo_providers,
                Duration::from_millis(config.geo_timeout_ms),
            ),
            mc: FallbackChain::new(
                "minecraft-status",
                mc::default_providers(),
                Duration::from_millis(config.mc_timeout_ms),
            ),
            self_ip: SelfIpDiscovery::default(),
            default_server: config.default_server.clone(),
            started_at: Instant::now(),
        })
    }
}

/// Empty 200 for CORS preflight, mirroring the API contract.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Assembles the router over the given state.
///
/// API routes accept GET and OPTIONS only; axum answers anything else with
/// 405. Unknown paths fall through to the embedded front end and then to the
/// JSON 404.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/ip-info", get(handlers::ip_info).options(preflight))
        .route("/api/lookup", get(handlers::lookup_query).options(preflight))
        .route(
            "/api/lookup/{ip}",
            get(handlers::lookup_path).options(preflight),
        )
        .route(
            "/api/minecraft-status",
            get(handlers::minecraft_status).options(preflight),
        )
        .route("/api/test", get(handlers::api_test).options(preflight))
        .route("/health", get(handlers::health))
        .route("/status", get(handlers::chain_status))
        .route("/", get(frontend::index))
        .fallback(frontend::static_or_404)
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves until interrupted.
pub async fn serve(config: Config) -> Result<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.bind, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    log::info!("IP Lookup Server running on http://{addr}");
    log::info!("  GET /api/ip-info - your IP and location");
    log::info!("  GET /api/lookup?ip=<addr> - look up a specific IP");
    log::info!("  GET /api/minecraft-status?server=<host> - Minecraft server status");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {e}");
    }
    log::info!("Shutting down");
}
