//! Anthropic Messages API tool format.

use serde_json::{Value, json};

use fsm_agent_core::ToolDescriptor;

pub fn tools(descriptors: &[ToolDescriptor]) -> Vec<Value> {
    descriptors.iter().map(tool).collect()
}

pub fn tool(descriptor: &ToolDescriptor) -> Value {
    json!({
        "name": descriptor.name,
        "description": descriptor.description,
        "input_schema": descriptor.input_schema(),
    })
}
