//! Where the guide server listens.
//!
//! `MCP_TRANSPORT` picks the transport (`stdio`, `tcp` or `http`). Each
//! network transport reads its own `MCP_TCP_*` or `MCP_HTTP_*` variables;
//! anything unset or unparsable keeps its default.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(any(feature = "tcp", feature = "http"))]
const DEFAULT_HOST: &str = "127.0.0.1";

/// Selected transport and its listening parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// One MCP session over the process's stdin and stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One MCP session per accepted TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// Stateless JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Listening address of the TCP transport.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

/// Listening address and endpoint of the HTTP transport.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Path of the JSON-RPC endpoint; always starts with `/`.
    pub rpc_path: String,

    /// Answer browser preflight requests from any origin.
    pub enable_cors: bool,
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 3000,
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: var("MCP_TCP_HOST").unwrap_or(defaults.host),
            port: parse_port("MCP_TCP_PORT", var("MCP_TCP_PORT"), defaults.port),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 8080,
            rpc_path: "/mcp".to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let rpc_path = match var("MCP_HTTP_PATH") {
            Some(path) if path.starts_with('/') => path,
            Some(path) => format!("/{}", path),
            None => defaults.rpc_path,
        };
        let enable_cors = var("MCP_HTTP_CORS")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "off"))
            .unwrap_or(defaults.enable_cors);

        Self {
            host: var("MCP_HTTP_HOST").unwrap_or(defaults.host),
            port: parse_port("MCP_HTTP_PORT", var("MCP_HTTP_PORT"), defaults.port),
            rpc_path,
            enable_cors,
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn parse_port(var: &str, value: Option<String>, default: u16) -> u16 {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(var, value = %raw, default, "Invalid port, using default");
            default
        }),
    }
}

// Stdio wins when compiled in, then TCP, then HTTP.
#[cfg(feature = "stdio")]
fn fallback() -> TransportConfig {
    TransportConfig::Stdio
}

#[cfg(all(not(feature = "stdio"), feature = "tcp"))]
fn fallback() -> TransportConfig {
    TransportConfig::Tcp(TcpConfig::default())
}

#[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
fn fallback() -> TransportConfig {
    TransportConfig::Http(HttpConfig::default())
}

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("Enable at least one transport feature: stdio, tcp or http");

impl Default for TransportConfig {
    fn default() -> Self {
        fallback()
    }
}

impl TransportConfig {
    /// Read the transport selection from `MCP_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let selected = var("MCP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match selected.as_str() {
            "" => Self::default(),
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_vars(&var)),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_vars(&var)),
            other => {
                warn!(transport = other, "Unknown or disabled transport, using default");
                Self::default()
            }
        }
    }

    /// One-line summary for the startup log.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}", cfg.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}{}", cfg.address(), cfg.rpc_path),
        }
    }
}
