//! Tool Registry - the tool catalog.
//!
//! This module provides:
//! - The ordered list of tool descriptors advertised to clients
//! - The static name -> handler mapping used by the dispatcher
//! - One compiled argument validator per tool
//!
//! The registry is built once at startup and never mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use serde_json::Value;
use tracing::warn;

use super::definitions::{
    BuildGuideTool, CharacterInfoTool, ComprehensiveGuideTool, TeamCompositionsTool,
    ToolDefinition,
};
use super::error::{RegistryError, ToolError};
use super::schema::ArgumentValidator;
use crate::domains::knowledge::KnowledgeStore;

/// Type-erased tool handler. Receives arguments that already passed the
/// tool's schema.
pub type ToolHandlerFn = fn(Value, &KnowledgeStore) -> Result<String, ToolError>;

/// A registered tool: its descriptor, validator and handler.
#[derive(Clone)]
pub struct ToolEntry {
    pub tool: Tool,
    pub validator: Arc<ArgumentValidator>,
    pub handler: ToolHandlerFn,
}

/// Decode the arguments into `T::Params` and run the tool.
///
/// A decode failure here means the advertised schema accepted something the
/// parameter type cannot hold, which is a fault of the tool, not the caller.
fn invoke<T: ToolDefinition>(arguments: Value, store: &KnowledgeStore) -> Result<String, ToolError> {
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::internal(T::NAME, format!("argument decode failed: {}", e)))?;
    T::execute(&params, store)
}

/// Build a Tool model (metadata) from a ToolDefinition.
fn build_tool<T: ToolDefinition>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Tool registry - the catalog of all available tools.
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    tools: Vec<Tool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a registry with no tools.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create the registry with every built-in tool.
    ///
    /// This is the central place where tools are registered; the order here
    /// is the order clients see.
    pub fn new() -> Result<Self, RegistryError> {
        let mut registry = Self::empty();
        registry.register::<CharacterInfoTool>()?;
        registry.register::<BuildGuideTool>()?;
        registry.register::<TeamCompositionsTool>()?;
        registry.register::<ComprehensiveGuideTool>()?;
        Ok(registry)
    }

    /// Register a tool and compile its input schema.
    ///
    /// A second tool with the same name is ignored.
    pub fn register<T: ToolDefinition>(&mut self) -> Result<(), RegistryError> {
        if self.index.contains_key(T::NAME) {
            warn!("Duplicate tool registration ignored: {}", T::NAME);
            return Ok(());
        }

        let tool = build_tool::<T>();
        let validator = ArgumentValidator::compile(&tool.input_schema).map_err(|reason| {
            RegistryError::InvalidSchema {
                tool: T::NAME.to_string(),
                reason,
            }
        })?;

        self.index.insert(T::NAME.to_string(), self.entries.len());
        self.tools.push(tool.clone());
        self.entries.push(ToolEntry {
            tool,
            validator: Arc::new(validator),
            handler: invoke::<T>,
        });
        Ok(())
    }

    /// All tool descriptors, in registration order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Find the entry registered under `name`.
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }
}
