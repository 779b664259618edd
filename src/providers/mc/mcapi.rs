//! mcapi.us adapter.
//!
//! The sparsest of the status providers: player counts live under
//! `players.now`, the version under `server.name`, and it reports neither
//! icon nor real port, so the canonical defaults fill those in. Failure
//! signal is a `status` field not equal to `"success"`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{DEFAULT_MC_PORT, DEFAULT_MOTD, MCAPI_BASE_URL};
use crate::error_handling::AdapterFailure;
use crate::models::{Players, ServerStatus};
use crate::normalize::{finalize_status, or_unknown};
use crate::providers::{get_json, Provider};

const SERVICE: &str = "mcapi.us";

/// Adapter for `mcapi.us`.
pub struct McApi {
    base_url: String,
}

impl Default for McApi {
    fn default() -> Self {
        Self {
            base_url: MCAPI_BASE_URL.to_string(),
        }
    }
}

impl McApi {
    /// Creates an adapter pointed at a non-default endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawServer {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPlayers {
    now: Option<u32>,
    max: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponse {
    status: Option<String>,
    error: Option<String>,
    online: Option<bool>,
    players: Option<RawPlayers>,
    server: Option<RawServer>,
    motd: Option<String>,
}

#[async_trait]
impl Provider for McApi {
    type Output = ServerStatus;

    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn fetch(
        &self,
        client: &reqwest::Client,
        target: &str,
        timeout: Duration,
    ) -> Result<ServerStatus, AdapterFailure> {
        let url = format!("{}/server/status?ip={}", self.base_url, target);
        let raw: RawResponse = get_json(client, &url, timeout).await?;

        if raw.status.as_deref() != Some("success") {
            return Err(AdapterFailure::Provider(
                raw.error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| "status was not success".to_string()),
            ));
        }

        let players = raw.players.unwrap_or_default();
        Ok(finalize_status(ServerStatus {
            online: raw.online.unwrap_or(false),
            players: Players {
                online: players.now.unwrap_or(0),
                max: players.max.unwrap_or(0),
            },
            version: or_unknown(raw.server.and_then(|s| s.name)),
            motd: raw
                .motd
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MOTD.to_string()),
            icon: None,
            hostname: target.to_string(),
            port: DEFAULT_MC_PORT,
            software: "Minecraft".to_string(),
            error: None,
        }))
    }
}
