//! Per-provider schema translation tests.
//!
//! Each adapter is exercised directly against a mock server to verify its
//! field mapping, default substitution, and failure-signal detection.

mod helpers;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ip_status::error_handling::{AdapterFailure, FailureClass};
use ip_status::normalize::UNKNOWN;
use ip_status::providers::geo::{IpApi, IpInfo, IpWho, IpapiCo};
use ip_status::providers::mc::{McApi, McSrvStat, McStatusIo};
use ip_status::providers::self_ip::SelfIpDiscovery;
use ip_status::providers::Provider;

use helpers::TEST_TIMEOUT;

#[tokio::test]
async fn test_ip_api_maps_distinct_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::ip_api_success("8.8.8.8")))
        .mount(&server)
        .await;

    let info = IpApi::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "8.8.8.8", TEST_TIMEOUT)
        .await
        .expect("successful payload maps");

    assert!(info.success);
    assert_eq!(info.ip, "8.8.8.8");
    assert_eq!(info.query, "8.8.8.8");
    assert_eq!(info.country, "United States");
    assert_eq!(info.country_code, "US");
    assert_eq!(info.region, "VA");
    assert_eq!(info.region_name, "Virginia");
    assert_eq!(info.city, "Ashburn");
    assert_eq!(info.zip, "20149");
    assert_eq!((info.lat, info.lon), (Some(39.03), Some(-77.5)));
    assert_eq!(info.isp, "Google LLC");
    assert_eq!(info.org, "Google Public DNS");
    assert_eq!(info.autonomous_system, "AS15169 Google LLC");
    assert_eq!(info.service, "ip-api.com");
}

#[tokio::test]
async fn test_ip_api_detects_semantic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::ip_api_failure()))
        .mount(&server)
        .await;

    let failure = IpApi::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "8.8.8.8", TEST_TIMEOUT)
        .await
        .expect_err("status=fail is a semantic failure");

    assert_eq!(failure.class(), FailureClass::Semantic);
    assert!(failure.to_string().contains("invalid query"));
}

#[tokio::test]
async fn test_ip_api_fills_missing_fields_with_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .mount(&server)
        .await;

    let info = IpApi::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "8.8.8.8", TEST_TIMEOUT)
        .await
        .expect("sparse payload still maps");

    for field in [
        &info.country,
        &info.country_code,
        &info.region,
        &info.region_name,
        &info.city,
        &info.zip,
        &info.timezone,
        &info.isp,
        &info.org,
        &info.autonomous_system,
    ] {
        assert_eq!(field, UNKNOWN);
    }
    // numeric fields stay absent, never zero-filled
    assert_eq!((info.lat, info.lon), (None, None));
}

#[tokio::test]
async fn test_ipwho_maps_nested_connection_and_timezone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::ipwho_success()))
        .mount(&server)
        .await;

    let info = IpWho::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "1.2.3.4", TEST_TIMEOUT)
        .await
        .expect("successful payload maps");

    assert_eq!(info.country, "Spain");
    assert_eq!(info.country_code, "ES");
    // region code and name land in separate canonical fields
    assert_eq!(info.region, "MD");
    assert_eq!(info.region_name, "Madrid");
    assert_eq!(info.timezone, "Europe/Madrid");
    assert_eq!(info.isp, "Example ISP");
    assert_eq!(info.org, "Example Org");
    assert_eq!(info.autonomous_system, "AS12345");
    assert_eq!(info.service, "ipwho.is");
}

#[tokio::test]
async fn test_ipwho_requires_success_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "reserved range",
        })))
        .mount(&server)
        .await;

    let failure = IpWho::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "1.2.3.4", TEST_TIMEOUT)
        .await
        .expect_err("success=false is a semantic failure");
    assert_eq!(failure.class(), FailureClass::Semantic);
}

#[tokio::test]
async fn test_ipapi_co_reuses_unified_org_for_isp() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.2.3.4/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "country_name": "Germany",
            "country_code": "DE",
            "region": "Berlin",
            "region_code": "BE",
            "city": "Berlin",
            "postal": "10115",
            "latitude": 52.52,
            "longitude": 13.405,
            "timezone": "Europe/Berlin",
            "org": "Example Carrier GmbH",
            "asn": "AS3320",
        })))
        .mount(&server)
        .await;

    let info = IpapiCo::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "1.2.3.4", TEST_TIMEOUT)
        .await
        .expect("successful payload maps");

    // no distinct ISP field on this provider: org stands in for both
    assert_eq!(info.isp, "Example Carrier GmbH");
    assert_eq!(info.org, "Example Carrier GmbH");
    assert_eq!(info.autonomous_system, "AS3320");
    assert_eq!(info.region, "BE");
    assert_eq!(info.region_name, "Berlin");
}

#[tokio::test]
async fn test_ipapi_co_detects_error_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.2.3.4/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": true,
            "reason": "RateLimited",
        })))
        .mount(&server)
        .await;

    let failure = IpapiCo::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "1.2.3.4", TEST_TIMEOUT)
        .await
        .expect_err("error=true is a semantic failure");
    assert_eq!(failure.class(), FailureClass::Semantic);
    assert!(failure.to_string().contains("RateLimited"));
}

#[tokio::test]
async fn test_ipinfo_splits_combined_loc_and_spreads_unified_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.2.3.4/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "1.2.3.4",
            "city": "Madrid",
            "region": "Madrid",
            "country": "ES",
            "loc": "40.4168,-3.7038",
            "org": "AS12345 Example Org",
            "postal": "28001",
            "timezone": "Europe/Madrid",
        })))
        .mount(&server)
        .await;

    let info = IpInfo::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "1.2.3.4", TEST_TIMEOUT)
        .await
        .expect("successful payload maps");

    assert_eq!((info.lat, info.lon), (Some(40.4168), Some(-3.7038)));
    // bare country code fills both canonical country fields
    assert_eq!(info.country, "ES");
    assert_eq!(info.country_code, "ES");
    // one unified org value serves isp, org, and as alike
    assert_eq!(info.isp, "AS12345 Example Org");
    assert_eq!(info.org, "AS12345 Example Org");
    assert_eq!(info.autonomous_system, "AS12345 Example Org");
    assert_eq!(info.region_name, "Madrid");
    assert_eq!(info.region, UNKNOWN);
}

#[tokio::test]
async fn test_ipinfo_empty_loc_defaults_to_zero_pair() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.2.3.4/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "1.2.3.4",
            "loc": "",
        })))
        .mount(&server)
        .await;

    let info = IpInfo::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "1.2.3.4", TEST_TIMEOUT)
        .await
        .expect("empty loc must not crash");

    // documented default-pair fallback for this provider: empty -> "0,0"
    assert_eq!((info.lat, info.lon), (Some(0.0), Some(0.0)));
}

#[tokio::test]
async fn test_ipinfo_missing_loc_also_defaults_to_zero_pair() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.2.3.4/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "1.2.3.4" })))
        .mount(&server)
        .await;

    let info = IpInfo::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "1.2.3.4", TEST_TIMEOUT)
        .await
        .expect("missing loc must not crash");
    assert_eq!((info.lat, info.lon), (Some(0.0), Some(0.0)));
}

#[tokio::test]
async fn test_ipinfo_half_unparseable_loc_collapses_to_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.2.3.4/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "1.2.3.4",
            "loc": "40.4168,not-a-number",
        })))
        .mount(&server)
        .await;

    let info = IpInfo::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "1.2.3.4", TEST_TIMEOUT)
        .await
        .expect("garbled loc must not crash");
    // an unparseable half is absent, not zero, and coordinates are joint
    assert_eq!((info.lat, info.lon), (None, None));
}

#[tokio::test]
async fn test_ipinfo_bogon_is_semantic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/10.0.0.1/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "10.0.0.1",
            "bogon": true,
        })))
        .mount(&server)
        .await;

    let failure = IpInfo::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "10.0.0.1", TEST_TIMEOUT)
        .await
        .expect_err("bogon is a semantic failure");
    assert_eq!(failure.class(), FailureClass::Semantic);
}

#[tokio::test]
async fn test_mcsrvstat_joins_motd_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/play.bdzonemc.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::mcsrvstat_online()))
        .mount(&server)
        .await;

    let status = McSrvStat::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "play.bdzonemc.com", TEST_TIMEOUT)
        .await
        .expect("successful payload maps");

    assert!(status.online);
    assert_eq!(status.players.online, 12);
    assert_eq!(status.players.max, 100);
    assert_eq!(status.version, "1.21.1");
    assert_eq!(status.motd, "Welcome to the server");
    assert_eq!(status.icon.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(status.hostname, "play.bdzonemc.com");
    assert_eq!(status.port, 25565);
    assert_eq!(status.software, "Paper");
}

#[tokio::test]
async fn test_mcsrvstat_offline_zeroes_players() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/play.bdzonemc.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "online": false,
            // provider still echoes stale counts; the canonical shape must not
            "players": { "online": 5, "max": 50 },
        })))
        .mount(&server)
        .await;

    let status = McSrvStat::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "play.bdzonemc.com", TEST_TIMEOUT)
        .await
        .expect("offline payload still maps");

    assert!(!status.online);
    assert_eq!(status.players.online, 0);
    assert_eq!(status.players.max, 0);
}

#[tokio::test]
async fn test_mcstatus_io_maps_nested_version_and_motd() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/status/java/play.bdzonemc.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "online": true,
            "host": "play.bdzonemc.com",
            "port": 25566,
            "players": { "online": 3, "max": 60 },
            "version": { "name_clean": "Paper 1.21" },
            "motd": { "clean": "A block game server" },
            "software": "Paper",
        })))
        .mount(&server)
        .await;

    let status = McStatusIo::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "play.bdzonemc.com", TEST_TIMEOUT)
        .await
        .expect("successful payload maps");

    assert!(status.online);
    assert_eq!(status.version, "Paper 1.21");
    assert_eq!(status.motd, "A block game server");
    assert_eq!(status.port, 25566);
    assert_eq!(status.players.max, 60);
}

#[tokio::test]
async fn test_mcapi_maps_players_now_and_server_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/server/status"))
        .and(query_param("ip", "play.bdzonemc.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "online": true,
            "players": { "now": 7, "max": 40 },
            "server": { "name": "1.20.4" },
            "motd": "Legacy API server",
        })))
        .mount(&server)
        .await;

    let status = McApi::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "play.bdzonemc.com", TEST_TIMEOUT)
        .await
        .expect("successful payload maps");

    assert!(status.online);
    assert_eq!(status.players.online, 7);
    assert_eq!(status.players.max, 40);
    assert_eq!(status.version, "1.20.4");
    assert_eq!(status.motd, "Legacy API server");
    // this provider reports no port or software; canonical defaults fill in
    assert_eq!(status.port, 25565);
    assert_eq!(status.software, "Minecraft");
}

#[tokio::test]
async fn test_mcapi_detects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/server/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "error": "invalid hostname",
        })))
        .mount(&server)
        .await;

    let failure = McApi::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "play.bdzonemc.com", TEST_TIMEOUT)
        .await
        .expect_err("status=error is a semantic failure");
    assert_eq!(failure.class(), FailureClass::Semantic);
    assert!(failure.to_string().contains("invalid hostname"));
}

#[tokio::test]
async fn test_adapter_timeout_is_classified_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(helpers::ip_api_success("8.8.8.8"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let failure = IpApi::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "8.8.8.8", Duration::from_millis(100))
        .await
        .expect_err("a stalled provider must time out");
    assert!(matches!(failure, AdapterFailure::Timeout(_)));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>down for maintenance</html>"))
        .mount(&server)
        .await;

    let failure = IpApi::with_base_url(server.uri())
        .fetch(&reqwest::Client::new(), "8.8.8.8", TEST_TIMEOUT)
        .await
        .expect_err("an HTML body is not a provider response");
    assert_eq!(failure.class(), FailureClass::Malformed);
}

#[tokio::test]
async fn test_self_ip_discovery_roundtrip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "203.0.113.77" })))
        .mount(&server)
        .await;

    let discovered = SelfIpDiscovery::with_base_url(server.uri())
        .discover(&reqwest::Client::new(), TEST_TIMEOUT)
        .await;
    assert_eq!(discovered.as_deref(), Some("203.0.113.77"));
}

#[tokio::test]
async fn test_self_ip_discovery_failure_yields_none() {
    // nothing mounted: the mock server answers 404
    let server = MockServer::start().await;
    let discovered = SelfIpDiscovery::with_base_url(server.uri())
        .discover(&reqwest::Client::new(), TEST_TIMEOUT)
        .await;
    assert_eq!(discovered, None);
}
