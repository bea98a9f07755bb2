//! Tool dispatcher - the single entry point for tool discovery and calls.
//!
//! A call goes through four steps: catalog lookup, schema validation (with
//! `null` arguments treated as absent), handler invocation against the
//! knowledge store, and wrapping of the handler's text into the content
//! envelope. An unknown name is rejected before any handler is touched. Every failure, including a
//! panicking handler, comes back as a [`ToolError`]; nothing escapes to the
//! transport.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{error, info, instrument, warn};

use super::error::{RegistryError, ToolError};
use super::registry::ToolRegistry;
use crate::domains::knowledge::KnowledgeStore;

/// Routes tool calls to their handlers.
///
/// Cheap to clone: the registry and the store are shared.
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
    store: Arc<KnowledgeStore>,
}

impl ToolDispatcher {
    /// Create a dispatcher over the built-in tools.
    pub fn new(store: Arc<KnowledgeStore>) -> Result<Self, RegistryError> {
        Ok(Self::with_registry(Arc::new(ToolRegistry::new()?), store))
    }

    /// Create a dispatcher over a custom registry.
    pub fn with_registry(registry: Arc<ToolRegistry>, store: Arc<KnowledgeStore>) -> Self {
        Self { registry, store }
    }

    /// All tool descriptors, in catalog order.
    pub fn list_tools(&self) -> &[Tool] {
        self.registry.tools()
    }

    /// The knowledge store handlers read from.
    pub fn store(&self) -> &Arc<KnowledgeStore> {
        &self.store
    }

    /// Validate and run a tool call.
    ///
    /// A missing `arguments` object is treated as empty.
    #[instrument(skip(self, arguments))]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        info!("Dispatching tool call");

        let result = self.run(name, arguments.unwrap_or_default());
        match &result {
            Ok(_) => info!("Tool call succeeded"),
            Err(e @ ToolError::Internal { detail, .. }) => {
                error!(kind = e.kind(), detail = %detail, "Tool call failed")
            }
            Err(e) => warn!(kind = e.kind(), "Tool call rejected: {}", e),
        }

        result.map(|text| CallToolResult::success(vec![Content::text(text)]))
    }

    /// Like [`call_tool`](Self::call_tool), with errors rendered into the
    /// protocol's error envelope.
    pub fn respond(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.call_tool(name, arguments)
            .unwrap_or_else(|e| e.to_call_result())
    }

    fn run(&self, name: &str, arguments: JsonObject) -> Result<String, ToolError> {
        let entry = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;

        let arguments = entry.validator.validate(arguments)?;

        let handler = entry.handler;
        let store = self.store.as_ref();
        match panic::catch_unwind(AssertUnwindSafe(|| handler(arguments, store))) {
            Ok(result) => result,
            Err(payload) => Err(ToolError::internal(name, panic_message(payload.as_ref()))),
        }
    }
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::{CharacterParams, ToolDefinition};
    use crate::domains::tools::error::ArgumentError;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn dispatcher() -> ToolDispatcher {
        ToolDispatcher::new(Arc::new(KnowledgeStore::seeded().unwrap())).unwrap()
    }

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    struct ExplodingTool;

    impl ToolDefinition for ExplodingTool {
        const NAME: &'static str = "explode";
        const DESCRIPTION: &'static str = "Always panics";
        type Params = CharacterParams;

        fn execute(_: &CharacterParams, _: &KnowledgeStore) -> Result<String, ToolError> {
            panic!("secret internal detail")
        }
    }

    #[test]
    fn test_list_tools_is_stable() {
        let dispatcher = dispatcher();
        let first = serde_json::to_value(dispatcher.list_tools()).unwrap();
        let second = serde_json::to_value(dispatcher.list_tools()).unwrap();
        assert_eq!(first, second);
        assert_eq!(dispatcher.list_tools().len(), 4);
    }

    #[test]
    fn test_call_success_wraps_single_text_block() {
        let result = dispatcher()
            .call_tool(
                "get_character_info",
                args(json!({ "character_name": "Mavuika" })),
            )
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        assert!(text_of(&result).contains("Pyro"));
    }

    #[test]
    fn test_unknown_tool() {
        let err = dispatcher()
            .call_tool("nonexistent_tool", args(json!({ "character_name": "Kazuha" })))
            .unwrap_err();
        assert_eq!(err, ToolError::UnknownTool("nonexistent_tool".to_string()));
    }

    #[test]
    fn test_missing_arguments_object() {
        let err = dispatcher().call_tool("get_team_compositions", None).unwrap_err();
        assert_eq!(err, ToolError::missing_argument("character_name"));
    }

    #[test]
    fn test_wrong_argument_type() {
        let err = dispatcher()
            .call_tool(
                "get_build_guide",
                args(json!({ "character_name": "kazuha", "role": 7 })),
            )
            .unwrap_err();
        match err {
            ToolError::InvalidArguments(ArgumentError::WrongType {
                field,
                expected,
                actual,
            }) => {
                assert_eq!(field, "role");
                assert!(expected.contains("string"));
                assert_eq!(actual, "number");
            }
            other => panic!("expected WrongType, got {:?}", other),
        }
    }

    #[test]
    fn test_panicking_handler_becomes_internal_error() {
        let mut registry = ToolRegistry::empty();
        registry.register::<ExplodingTool>().unwrap();
        let dispatcher = ToolDispatcher::with_registry(
            Arc::new(registry),
            Arc::new(KnowledgeStore::seeded().unwrap()),
        );

        let call = || dispatcher.call_tool("explode", args(json!({ "character_name": "x" })));

        let err = call().unwrap_err();
        match &err {
            ToolError::Internal { tool, detail } => {
                assert_eq!(tool, "explode");
                assert_eq!(detail, "secret internal detail");
            }
            other => panic!("expected Internal, got {:?}", other),
        }
        assert!(!err.to_string().contains("secret"));

        // The dispatcher keeps serving after a fault.
        assert!(matches!(call(), Err(ToolError::Internal { .. })));
    }

    #[test]
    fn test_respond_renders_errors_as_text() {
        let result = dispatcher().respond(
            "get_build_guide",
            args(json!({ "character_name": "unknown_character_xyz" })),
        );
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("unknown_character_xyz"));
    }
}
