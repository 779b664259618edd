//! Configuration: process-wide constants and command-line options.

use std::time::Duration;

use clap::{Parser, ValueEnum};

// constants (used as defaults)
/// Port the HTTP server listens on unless overridden via `--port` or `PORT`.
pub const DEFAULT_PORT: u16 = 3000;
/// Bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "0.0.0.0";

// Resolution timeouts
/// Per-provider timeout for IP geolocation calls, in milliseconds.
pub const GEO_TIMEOUT_MS: u64 = 5_000;
/// Per-provider timeout for Minecraft status calls, in milliseconds.
///
/// Status APIs ping the game server themselves, so they are given twice the
/// budget of the geolocation providers.
pub const MC_TIMEOUT_MS: u64 = 10_000;
/// Timeout for the one-shot public-IP discovery call.
pub const SELF_IP_TIMEOUT: Duration = Duration::from_millis(5_000);

// Minecraft defaults
/// Server queried when a status request does not name one.
pub const DEFAULT_MC_SERVER: &str = "play.bdzonemc.com";
/// Default Java edition port, reported when no provider supplies one.
pub const DEFAULT_MC_PORT: u16 = 25565;
/// Placeholder message of the day for servers that report none.
pub const DEFAULT_MOTD: &str = "BDZONE Minecraft Server";
/// Error string nested in the degraded status payload when every provider failed.
pub const MC_OFFLINE_ERROR: &str = "Unable to connect to server";

/// Well-known public address substituted when the caller's real IP cannot be
/// discovered (local development behind loopback with no internet route).
pub const DEMO_IP: &str = "8.8.8.8";

// Provider endpoints.
// ip-api.com's free tier is HTTP-only; every other provider is HTTPS.
/// Geolocation, primary provider.
pub const IP_API_BASE_URL: &str = "http://ip-api.com";
/// Geolocation, second provider.
pub const IPWHO_BASE_URL: &str = "https://ipwho.is";
/// Geolocation, third provider.
pub const IPAPI_CO_BASE_URL: &str = "https://ipapi.co";
/// Geolocation, last provider.
pub const IPINFO_BASE_URL: &str = "https://ipinfo.io";
/// Public-IP discovery service (not part of the fallback chain).
pub const IPIFY_BASE_URL: &str = "https://api.ipify.org";
/// Minecraft status, primary provider.
pub const MCSRVSTAT_BASE_URL: &str = "https://api.mcsrvstat.us";
/// Minecraft status, second provider.
pub const MCSTATUS_IO_BASE_URL: &str = "https://api.mcstatus.io";
/// Minecraft status, last provider.
pub const MCAPI_BASE_URL: &str = "https://mcapi.us";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Normal operational output.
    Info,
    /// Per-provider resolution detail.
    Debug,
    /// Everything.
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors.
    Plain,
    /// Structured JSON, one object per line.
    Json,
}

/// Geolocation fallback policy.
///
/// Both policies run through the same orchestrator; they differ only in how
/// many providers the chain holds. The single-provider configuration surfaces
/// its lone provider's failure directly instead of reporting chain exhaustion.
#[derive(Clone, Debug, ValueEnum)]
pub enum GeoFallback {
    /// Try every configured geolocation provider in order.
    Full,
    /// Query only the primary provider and fail hard if it fails.
    PrimaryOnly,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults and can be overridden via command-line
/// flags or, where noted, environment variables.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// ip_status
///
/// # Custom port and default Minecraft server
/// ip_status --port 8080 --default-server mc.example.com
///
/// # Legacy single-provider geolocation
/// ip_status --geo-fallback primary-only
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_status",
    about = "Serves IP geolocation and Minecraft server status over HTTP."
)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-provider timeout for IP geolocation calls, in milliseconds
    #[arg(long, default_value_t = GEO_TIMEOUT_MS)]
    pub geo_timeout_ms: u64,

    /// Per-provider timeout for Minecraft status calls, in milliseconds
    #[arg(long, default_value_t = MC_TIMEOUT_MS)]
    pub mc_timeout_ms: u64,

    /// Minecraft server queried when the request does not name one
    #[arg(long, env = "DEFAULT_MC_SERVER", default_value = DEFAULT_MC_SERVER)]
    pub default_server: String,

    /// Geolocation fallback policy: full|primary-only
    #[arg(long, value_enum, default_value_t = GeoFallback::Full)]
    pub geo_fallback: GeoFallback,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            geo_timeout_ms: GEO_TIMEOUT_MS,
            mc_timeout_ms: MC_TIMEOUT_MS,
            default_server: DEFAULT_MC_SERVER.to_string(),
            geo_fallback: GeoFallback::Full,
        }
    }
}
