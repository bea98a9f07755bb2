//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A parameters struct (deserialized from the call arguments, and the
//!   source of the advertised input schema)
//! - An `execute()` function holding the handler logic
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register it in `registry.rs`

pub mod build_guide;
pub mod character_info;
pub mod common;
pub mod comprehensive_guide;
pub mod team_compositions;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::error::ToolError;
use crate::domains::knowledge::KnowledgeStore;

pub use build_guide::{BuildGuideParams, BuildGuideTool};
pub use character_info::CharacterInfoTool;
pub use common::CharacterParams;
pub use comprehensive_guide::{ComprehensiveGuideParams, ComprehensiveGuideTool};
pub use team_compositions::TeamCompositionsTool;

/// Trait for tool definitions.
///
/// Each tool must implement this trait to provide its metadata, its typed
/// parameters and its handler. Handlers are pure: they only read the store.
pub trait ToolDefinition {
    /// The unique name of the tool, used for dispatch.
    const NAME: &'static str;

    /// A description of what the tool does, shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments; their JSON schema is the tool's input schema.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Run the tool against the store and return the text to send back.
    fn execute(params: &Self::Params, store: &KnowledgeStore) -> Result<String, ToolError>;
}
