//! mcsrvstat.us adapter.
//!
//! Reports the message of the day as an array of cleaned lines, which are
//! joined into the single canonical string. Any well-formed payload counts as
//! a result; this provider has no separate failure flag.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{DEFAULT_MC_PORT, DEFAULT_MOTD, MCSRVSTAT_BASE_URL};
use crate::error_handling::AdapterFailure;
use crate::models::{Players, ServerStatus};
use crate::normalize::{finalize_status, or_unknown};
use crate::providers::{get_json, Provider};

const SERVICE: &str = "mcsrvstat.us";

/// Adapter for `api.mcsrvstat.us`.
pub struct McSrvStat {
    base_url: String,
}

impl Default for McSrvStat {
    fn default() -> Self {
        Self {
            base_url: MCSRVSTAT_BASE_URL.to_string(),
        }
    }
}

impl McSrvStat {
    /// Creates an adapter pointed at a non-default endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMotd {
    clean: Option<Vec<String>>,
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
    players: Option<RawPlayers>,
    version: Option<String>,
    motd: Option<RawMotd>,
    icon: Option<String>,
    hostname: Option<String>,
    port: Option<u16>,
    software: Option<String>,
}

#[async_trait]
impl Provider for McSrvStat {
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
        let url = format!("{}/2/{}", self.base_url, target);
        let raw: RawResponse = get_json(client, &url, timeout).await?;

        let players = raw.players.unwrap_or_default();
        let motd = raw
            .motd
            .and_then(|m| m.clean)
            .map(|lines| lines.join(" "))
            .filter(|joined| !joined.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MOTD.to_string());

        Ok(finalize_status(ServerStatus {
            online: raw.online.unwrap_or(false),
            players: Players {
                online: players.online.unwrap_or(0),
                max: players.max.unwrap_or(0),
            },
            version: or_unknown(raw.version),
            motd,
            icon: raw.icon,
            hostname: raw.hostname.unwrap_or_else(|| target.to_string()),
            port: raw.port.unwrap_or(DEFAULT_MC_PORT),
            software: raw.software.unwrap_or_else(|| "Minecraft".to_string()),
            error: None,
        }))
    }
}
