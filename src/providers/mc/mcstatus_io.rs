//! mcstatus.io adapter.
//!
//! Nests the version under `version.name_clean` and the message of the day
//! under `motd.clean` (a plain string here, unlike mcsrvstat's array). The
//! API answers 404 for unknown hosts, which surfaces as a network-class
//! failure and triggers fallback.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{DEFAULT_MC_PORT, DEFAULT_MOTD, MCSTATUS_IO_BASE_URL};
use crate::error_handling::AdapterFailure;
use crate::models::{Players, ServerStatus};
use crate::normalize::{finalize_status, or_unknown};
use crate::providers::{get_json, Provider};

const SERVICE: &str = "mcstatus.io";

/// Adapter for `api.mcstatus.io`.
pub struct McStatusIo {
    base_url: String,
}

impl Default for McStatusIo {
    fn default() -> Self {
        Self {
            base_url: MCSTATUS_IO_BASE_URL.to_string(),
        }
    }
}

impl McStatusIo {
    /// Creates an adapter pointed at a non-default endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVersion {
    name_clean: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMotd {
    clean: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPlayers {
    online: Option<u32>,
    max: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponse {
    online: Option<bool>,
    host: Option<String>,
    port: Option<u16>,
    players: Option<RawPlayers>,
    version: Option<RawVersion>,
    motd: Option<RawMotd>,
    icon: Option<String>,
    software: Option<String>,
}

#[async_trait]
impl Provider for McStatusIo {
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
        let url = format!("{}/v2/status/java/{}", self.base_url, target);
        let raw: RawResponse = get_json(client, &url, timeout).await?;

        let players = raw.players.unwrap_or_default();
        let motd = raw
            .motd
            .and_then(|m| m.clean)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MOTD.to_string());

        Ok(finalize_status(ServerStatus {
            online: raw.online.unwrap_or(false),
            players: Players {
                online: players.online.unwrap_or(0),
                max: players.max.unwrap_or(0),
            },
            version: or_unknown(raw.version.and_then(|v| v.name_clean)),
            motd,
            icon: raw.icon,
            hostname: raw.host.unwrap_or_else(|| target.to_string()),
            port: raw.port.unwrap_or(DEFAULT_MC_PORT),
            software: raw.software.unwrap_or_else(|| "Minecraft".to_string()),
            error: None,
        }))
    }
}
