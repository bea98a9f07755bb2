//! Tool-specific error types.
//!
//! `ToolError` is the dispatch error taxonomy surfaced to clients. Every
//! variant renders to a single human-readable text block.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

/// Why a call's arguments were rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required argument was absent (or explicitly null).
    #[error("missing required argument '{field}'")]
    Missing { field: String },

    /// An argument was present with the wrong JSON type.
    #[error("argument '{field}' must be of type {expected}, got {actual}")]
    WrongType {
        field: String,
        expected: String,
        actual: &'static str,
    },

    /// An argument has the right type but breaks another schema rule.
    #[error("argument '{field}' is invalid: {reason}")]
    Invalid { field: String, reason: String },
}

impl ArgumentError {
    /// Name of the offending argument. `arguments` means the whole object.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Missing { field }
            | Self::WrongType { field, .. }
            | Self::Invalid { field, .. } => Some(field),
        }
    }

    /// The call's arguments are not a JSON object at all.
    pub fn not_an_object(actual: &'static str) -> Self {
        Self::WrongType {
            field: "arguments".to_string(),
            expected: "object".to_string(),
            actual,
        }
    }
}

/// The tool catalog could not be built.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A tool advertises an input schema that does not compile.
    #[error("Input schema of tool '{tool}' is invalid: {reason}")]
    InvalidSchema { tool: String, reason: String },
}

/// Errors that can occur while dispatching a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments do not satisfy the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] ArgumentError),

    /// The referenced character (or its data) is not in the knowledge store.
    #[error("{message}")]
    NotFound { key: String, message: String },

    /// The handler failed unexpectedly. `detail` is logged, never displayed.
    #[error("Internal error while executing tool '{tool}'")]
    Internal { tool: String, detail: String },
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a "missing argument" error.
    pub fn missing_argument(field: impl Into<String>) -> Self {
        Self::InvalidArguments(ArgumentError::Missing {
            field: field.into(),
        })
    }

    /// The character key is not in the store at all.
    pub fn character_not_found(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::NotFound {
            message: format!("Character '{}' not found in database.", key),
            key,
        }
    }

    /// The character exists but has no builds recorded.
    pub fn builds_not_found(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::NotFound {
            message: format!("No builds found for '{}'.", key),
            key,
        }
    }

    /// The character has builds, but none for the requested role.
    pub fn role_build_not_found(key: impl Into<String>, role: &str) -> Self {
        let key = key.into();
        Self::NotFound {
            message: format!("No {} builds found for '{}'.", role, key),
            key,
        }
    }

    /// The character exists but has no team compositions recorded.
    pub fn teams_not_found(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::NotFound {
            message: format!("No team compositions found for '{}'.", key),
            key,
        }
    }

    /// Create a new "internal" error.
    pub fn internal(tool: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            tool: tool.into(),
            detail: detail.into(),
        }
    }

    /// Short stable label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments(_) => "invalid_arguments",
            Self::NotFound { .. } => "not_found",
            Self::Internal { .. } => "internal",
        }
    }

    /// Render this error as the protocol's error envelope.
    pub fn to_call_result(&self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(self.to_string())])
    }
}
