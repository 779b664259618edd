//! ip_status library: IP geolocation and Minecraft status resolution.
//!
//! This library resolves IPv4 addresses into geolocation metadata and reports
//! the live status of Minecraft servers by querying ordered chains of public
//! APIs, normalizing each provider's response shape into one stable JSON
//! contract and failing over to the next provider on error, timeout, or a
//! provider-reported failure.
//!
//! # Example
//!
//! ```no_run
//! use ip_status::config::Config;
//! use ip_status::server;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! server::serve(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod normalize;
pub mod providers;
pub mod resolve;
pub mod server;
pub mod validate;
