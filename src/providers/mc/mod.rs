//! Minecraft status provider adapters.
//!
//! Three services, tried in the order below. A provider answering
//! `online: false` is a valid result (the game server really is down), not a
//! failure; fallback only happens when the status API itself cannot be
//! reached or answers garbage.

use crate::models::ServerStatus;
use crate::providers::Provider;

mod mcapi;
mod mcsrvstat;
mod mcstatus_io;

pub use mcapi::McApi;
pub use mcsrvstat::McSrvStat;
pub use mcstatus_io::McStatusIo;

/// The full fallback chain, in fixed configured order.
pub fn default_providers() -> Vec<Box<dyn Provider<Output = ServerStatus>>> {
    vec![
        Box::new(McSrvStat::default()),
        Box::new(McStatusIo::default()),
        Box::new(McApi::default()),
    ]
}
