//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the callable operations clients discover and invoke; each one
//! answers a question against the knowledge store.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - The tool catalog: descriptors and the name -> handler map
//! - `schema.rs` - Argument validation against the advertised input schema (`jsonschema`)
//! - `dispatcher.rs` - Lookup, validation, invocation and error conversion
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition` (params struct + `execute()`)
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `server.rs` or the transports!**

pub mod definitions;
mod dispatcher;
mod error;
mod registry;
pub mod schema;

pub use definitions::ToolDefinition;
pub use dispatcher::ToolDispatcher;
pub use error::{ArgumentError, RegistryError, ToolError};
pub use registry::{ToolEntry, ToolHandlerFn, ToolRegistry};
