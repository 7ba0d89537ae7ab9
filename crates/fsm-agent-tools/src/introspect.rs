//! Parameter-spec derivation from schemars-generated schemas.
//!
//! This is the static counterpart of runtime signature introspection: the
//! input struct's field types and doc comments become the tool's parameter
//! specs at registration time.

use schemars::JsonSchema;
use serde_json::Value;

use fsm_agent_core::{ParamSpec, ParamType};

use super::{ToolError, generate_schema};

/// Derives parameter specs from `T`'s JSON schema. Fields not listed as
/// required become optional parameters; their schema default (or `null`)
/// is carried as the default value.
pub fn derive_params<T: JsonSchema>(tool: &str) -> Result<Vec<ParamSpec>, ToolError> {
    params_from_schema(tool, &generate_schema::<T>())
}

/// Walks an object schema's `properties`/`required` into parameter specs.
/// A property with no usable `type` fails with
/// [`ToolError::MissingAnnotation`]; there is no permissive "any" fallback.
pub fn params_from_schema(tool: &str, schema: &Value) -> Result<Vec<ParamSpec>, ToolError> {
    let properties = match schema.get("properties").and_then(Value::as_object) {
        Some(props) => props,
        None => return Ok(Vec::new()),
    };
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut params = Vec::new();
    for (name, prop) in properties {
        let (ty, nullable) =
            property_type(prop).ok_or_else(|| ToolError::MissingAnnotation {
                tool: tool.to_string(),
                param: name.clone(),
            })?;

        let description = prop
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);

        let default = if nullable || !required.contains(&name.as_str()) {
            Some(prop.get("default").cloned().unwrap_or(Value::Null))
        } else {
            None
        };

        params.push(ParamSpec {
            name: name.clone(),
            ty,
            description,
            default,
        });
    }
    Ok(params)
}

// schemars renders `Option<T>` as `"type": ["<t>", "null"]`; the non-null
// entry is the semantic type and the null marks the parameter optional.
fn property_type(prop: &Value) -> Option<(ParamType, bool)> {
    match prop.get("type") {
        Some(Value::String(s)) => ParamType::from_schema_str(s).map(|ty| (ty, false)),
        Some(Value::Array(entries)) => {
            let names: Vec<&str> = entries.iter().filter_map(Value::as_str).collect();
            let nullable = names.contains(&"null");
            names
                .iter()
                .find(|s| **s != "null")
                .and_then(|s| ParamType::from_schema_str(s))
                .map(|ty| (ty, nullable))
        }
        _ => None,
    }
}
