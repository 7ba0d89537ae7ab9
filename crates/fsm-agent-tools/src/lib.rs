//! Tool system for the fsm-agent framework

mod function;
mod introspect;
mod registry;

pub use fsm_agent_core::{ParamSpec, ParamType, Tool, ToolDescriptor};
pub use function::{FunctionTool, FunctionToolBuilder};
pub use introspect::{derive_params, params_from_schema};
pub use registry::ToolRegistry;

use schemars::JsonSchema;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),
    #[error("Tool '{0}' has no description")]
    MissingDescription(String),
    #[error("Tool '{0}' has no handler")]
    MissingHandler(String),
    #[error("Parameter '{param}' of tool '{tool}' has no usable type annotation")]
    MissingAnnotation { tool: String, param: String },
    #[error("Tool '{tool}' execution failed: {source}")]
    Execution {
        tool: String,
        #[source]
        source: anyhow::Error,
    },
}

pub fn generate_schema<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({}))
}
