//! Argument validation against a tool's advertised input schema.
//!
//! Each tool's schema is compiled once with `jsonschema` when the tool is
//! registered. Before validation, arguments whose value is JSON `null` are
//! dropped, so an explicit `null` behaves exactly like an absent argument for
//! both the schema check and the typed decode that follows.

use jsonschema::error::{TypeKind, ValidationErrorKind};
use jsonschema::{ValidationError, Validator};
use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::ArgumentError;

/// Field name reported when the arguments themselves are the wrong shape.
const ROOT_FIELD: &str = "arguments";

/// JSON type name of a value, as used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Compiled input schema of one tool.
pub struct ArgumentValidator {
    validator: Validator,
}

impl ArgumentValidator {
    /// Compile `schema`. Fails if it is not a valid JSON Schema.
    pub fn compile(schema: &JsonObject) -> Result<Self, String> {
        let validator = jsonschema::validator_for(&Value::Object(schema.clone()))
            .map_err(|e| e.to_string())?;
        Ok(Self { validator })
    }

    /// Drop `null` arguments and check the rest against the schema.
    ///
    /// Returns the arguments ready for decoding. When several arguments are
    /// wrong, a missing required one is reported first.
    pub fn validate(&self, arguments: JsonObject) -> Result<Value, ArgumentError> {
        let instance = Value::Object(
            arguments
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .collect(),
        );

        let mut errors: Vec<ArgumentError> = self
            .validator
            .iter_errors(&instance)
            .map(|e| to_argument_error(&e))
            .collect();
        errors.sort_by_key(|e| !matches!(e, ArgumentError::Missing { .. }));

        match errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(instance),
        }
    }
}

fn to_argument_error(error: &ValidationError<'_>) -> ArgumentError {
    let path = error.instance_path.to_string();
    let field = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(ROOT_FIELD)
        .to_string();

    match &error.kind {
        ValidationErrorKind::Required { property } => ArgumentError::Missing {
            field: property
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| property.to_string()),
        },
        ValidationErrorKind::Type { kind } => ArgumentError::WrongType {
            field,
            expected: expected_types(kind),
            actual: json_type_name(&error.instance),
        },
        _ => ArgumentError::Invalid {
            field,
            reason: error.to_string(),
        },
    }
}

fn expected_types(kind: &TypeKind) -> String {
    match kind {
        TypeKind::Single(primitive) => primitive.to_string(),
        TypeKind::Multiple(primitives) => (*primitives)
            .into_iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" or "),
    }
}
