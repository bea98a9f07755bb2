//! Transports that carry the guide server to its clients.
//!
//! All of them serve the same `McpServer`, so a character lookup answers
//! identically whichever one is used:
//! - `stdio` (default feature): a single session for a launching MCP client.
//! - `tcp`: line-delimited JSON-RPC, one session per connection.
//! - `http`: stateless JSON-RPC over POST plus a `/health` endpoint.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
