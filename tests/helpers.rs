// Shared test helpers: provider payload fixtures and a spawned test server.
//
// This module provides common utilities used across multiple test files to
// reduce duplication. Every chain in the spawned app points at the same mock
// server; the adapters' request paths are distinct, so one mock server can
// play every provider at once.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{json, Value};

use ip_status::models::{GeoInfo, ServerStatus};
use ip_status::providers::geo::{IpApi, IpInfo, IpWho, IpapiCo};
use ip_status::providers::mc::{McApi, McSrvStat, McStatusIo};
use ip_status::providers::self_ip::SelfIpDiscovery;
use ip_status::providers::Provider;
use ip_status::resolve::FallbackChain;
use ip_status::server::{build_router, AppState};

/// Per-provider timeout used by the spawned app's chains. Short enough that
/// all-fail tests stay fast, long enough for a mock round trip.
#[allow(dead_code)] // Used by other test files
pub const TEST_TIMEOUT: Duration = Duration::from_millis(500);

/// Default server baked into the spawned app.
#[allow(dead_code)] // Used by other test files
pub const TEST_DEFAULT_SERVER: &str = "play.bdzonemc.com";

/// Builds the full geolocation chain against `base`.
#[allow(dead_code)] // Used by other test files
pub fn geo_chain(base: &str) -> FallbackChain<GeoInfo> {
    let providers: Vec<Box<dyn Provider<Output = GeoInfo>>> = vec![
        Box::new(IpApi::with_base_url(base)),
        Box::new(IpWho::with_base_url(base)),
        Box::new(IpapiCo::with_base_url(base)),
        Box::new(IpInfo::with_base_url(base)),
    ];
    FallbackChain::new("geolocation", providers, TEST_TIMEOUT)
}

/// Builds the full Minecraft status chain against `base`.
#[allow(dead_code)] // Used by other test files
pub fn mc_chain(base: &str) -> FallbackChain<ServerStatus> {
    let providers: Vec<Box<dyn Provider<Output = ServerStatus>>> = vec![
        Box::new(McSrvStat::with_base_url(base)),
        Box::new(McStatusIo::with_base_url(base)),
        Box::new(McApi::with_base_url(base)),
    ];
    FallbackChain::new("minecraft-status", providers, TEST_TIMEOUT)
}

/// Spawns the app on an ephemeral port with every provider pointed at
/// `mock_base`. Returns the bound address.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app(mock_base: &str) -> SocketAddr {
    let state = AppState {
        client: reqwest::Client::new(),
        geo: geo_chain(mock_base),
        mc: mc_chain(mock_base),
        self_ip: SelfIpDiscovery::with_base_url(mock_base),
        default_server: TEST_DEFAULT_SERVER.to_string(),
        started_at: Instant::now(),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has a local address");
    let app = build_router(Arc::new(state));
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Test server failed");
    });
    addr
}

/// A complete, successful ip-api.com payload for `ip`.
#[allow(dead_code)] // Used by other test files
pub fn ip_api_success(ip: &str) -> Value {
    json!({
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "region": "VA",
        "regionName": "Virginia",
        "city": "Ashburn",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "query": ip,
    })
}

/// An ip-api.com semantic failure payload (HTTP 200, status "fail").
#[allow(dead_code)] // Used by other test files
pub fn ip_api_failure() -> Value {
    json!({
        "status": "fail",
        "message": "invalid query",
    })
}

/// A successful ipwho.is payload.
#[allow(dead_code)] // Used by other test files
pub fn ipwho_success() -> Value {
    json!({
        "success": true,
        "country": "Spain",
        "country_code": "ES",
        "region": "Madrid",
        "region_code": "MD",
        "city": "Madrid",
        "postal": "28001",
        "latitude": 40.4168,
        "longitude": -3.7038,
        "timezone": { "id": "Europe/Madrid" },
        "connection": { "asn": 12345, "org": "Example Org", "isp": "Example ISP" },
    })
}

/// A successful mcsrvstat.us payload.
#[allow(dead_code)] // Used by other test files
pub fn mcsrvstat_online() -> Value {
    json!({
        "online": true,
        "players": { "online": 12, "max": 100 },
        "version": "1.21.1",
        "motd": { "clean": ["Welcome to", "the server"] },
        "icon": "data:image/png;base64,AAAA",
        "hostname": "play.bdzonemc.com",
        "port": 25565,
        "software": "Paper",
    })
}
