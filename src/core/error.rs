//! Error types and handling for the MCP server.
//!
//! Startup and serving failures from every domain convert into one `Error`.
//! Failures of individual tool calls never reach it: they are answered to the
//! client in-band.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// A tool's input schema could not be compiled.
    #[error("Tool registry error: {0}")]
    Registry(#[from] crate::domains::tools::RegistryError),

    /// The compiled-in knowledge base is inconsistent.
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] crate::domains::knowledge::KnowledgeError),

    /// Error raised by the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
