//! Genshin Impact Guide MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that answers
//! questions about Genshin Impact characters: profiles, recommended builds
//! and team compositions, served from a compiled-in knowledge base.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the main server
//!   and the transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **knowledge**: The read-only character, build and team store
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: JSON views of the knowledge base that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use genshin_guide_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
