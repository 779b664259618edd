//! Request handlers for the JSON API.
//!
//! Every handler answers with JSON: 200 for resolved-or-degraded results,
//! 400 for validation failures, 500 for unrecoverable resolution errors
//! (geolocation only; the status endpoint degrades instead, by design).

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, OriginalUri, Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::config::{DEMO_IP, MC_OFFLINE_ERROR, SELF_IP_TIMEOUT};
use crate::error_handling::ValidationError;
use crate::models::McStatusResponse;
use crate::normalize::offline_status;
use crate::validate::{is_local_address, validate_ip, validate_server_target};

use super::{client_ip, AppState};

/// Query parameters for `/api/lookup`.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    ip: Option<String>,
}

/// Query parameters for `/api/minecraft-status`.
#[derive(Debug, Deserialize)]
pub struct McParams {
    server: Option<String>,
}

/// `GET /api/ip-info` - resolves the caller's own network-visible address.
pub async fn ip_info(
    State(state): State<Arc<AppState>>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    let observed = client_ip(&headers, remote);

    // A loopback/local caller has no geolocatable address; ask the discovery
    // service for our public IP, and settle for the demo address when even
    // that is unreachable.
    let target = if is_local_address(&observed) {
        match state.self_ip.discover(&state.client, SELF_IP_TIMEOUT).await {
            Some(ip) => ip,
            None => DEMO_IP.to_string(),
        }
    } else {
        observed.clone()
    };

    match state.geo.resolve(&state.client, &target).await {
        Ok(resolved) => (StatusCode::OK, Json(resolved.value)).into_response(),
        Err(error) => {
            log::error!("ip-info resolution failed for {target}: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch IP information",
                    "details": error.to_string(),
                    "ip": observed,
                    "success": false,
                })),
            )
                .into_response()
        }
    }
}

/// `GET /api/lookup?ip=<addr>` - resolves an explicitly supplied IP.
pub async fn lookup_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Response {
    let Some(ip) = params.ip else {
        return validation_failure(&ValidationError::MissingTarget);
    };
    resolve_lookup(state, ip).await
}

/// `GET /api/lookup/{ip}` - path-parameter form of the lookup.
pub async fn lookup_path(
    State(state): State<Arc<AppState>>,
    Path(ip): Path<String>,
) -> Response {
    resolve_lookup(state, ip).await
}

async fn resolve_lookup(state: Arc<AppState>, ip: String) -> Response {
    if let Err(error) = validate_ip(&ip) {
        return validation_failure(&error);
    }

    match state.geo.resolve(&state.client, &ip).await {
        Ok(resolved) => (StatusCode::OK, Json(resolved.value)).into_response(),
        Err(error) => {
            log::error!("lookup failed for {ip}: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch IP information",
                    "success": false,
                })),
            )
                .into_response()
        }
    }
}

fn validation_failure(error: &ValidationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": error.to_string(),
            "success": false,
        })),
    )
        .into_response()
}

/// `GET /api/minecraft-status?server=<host>` - resolves server status.
///
/// Chain exhaustion here is a valid degraded success, not an error: the
/// response stays 200 with an offline status and `service: "fallback"`.
pub async fn minecraft_status(
    State(state): State<Arc<AppState>>,
    Query(params): Query<McParams>,
) -> Response {
    let server = validate_server_target(params.server.as_deref(), &state.default_server);

    let (status, service) = match state.mc.resolve(&state.client, &server).await {
        Ok(resolved) => (resolved.value, resolved.service.to_string()),
        Err(error) => {
            log::warn!("all status providers failed for {server}: {error}");
            (
                offline_status(&server, MC_OFFLINE_ERROR),
                "fallback".to_string(),
            )
        }
    };

    let body = McStatusResponse {
        success: true,
        server,
        status,
        service,
        timestamp: Utc::now().to_rfc3339(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// `GET /api/test` - connectivity check used by the front end.
pub async fn api_test(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    Json(json!({
        "message": "API is working!",
        "timestamp": Utc::now().to_rfc3339(),
        "method": method.as_str(),
        "url": uri.to_string(),
    }))
    .into_response()
}

/// `GET /health` - liveness probe.
pub async fn health() -> Response {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
    }))
    .into_response()
}

/// `GET /status` - resolution counters for both chains.
pub async fn chain_status(State(state): State<Arc<AppState>>) -> Response {
    let (geo_requests, geo_failures, geo_exhausted) = state.geo.stats().snapshot();
    let (mc_requests, mc_failures, mc_exhausted) = state.mc.stats().snapshot();
    Json(json!({
        "uptime_seconds": state.started_at.elapsed().as_secs_f64(),
        "ip": {
            "requests": geo_requests,
            "provider_failures": geo_failures,
            "exhausted": geo_exhausted,
        },
        "minecraft": {
            "requests": mc_requests,
            "provider_failures": mc_failures,
            "exhausted": mc_exhausted,
        },
    }))
    .into_response()
}
