//! google-genai function-declaration format.
//!
//! The SDK expects one Tool object carrying all declarations, with schema
//! type names in its uppercase convention.

use serde_json::{Map, Value, json};

use fsm_agent_core::ToolDescriptor;

pub fn tool(descriptors: &[ToolDescriptor]) -> Value {
    json!({
        "function_declarations": descriptors.iter().map(declaration).collect::<Vec<_>>(),
    })
}

pub fn declaration(descriptor: &ToolDescriptor) -> Value {
    let mut properties = Map::new();
    for param in &descriptor.params {
        let mut prop = Map::new();
        prop.insert("type".into(), Value::String(param.ty.as_google_str().into()));
        if let Some(ref description) = param.description {
            prop.insert("description".into(), Value::String(description.clone()));
        }
        properties.insert(param.name.clone(), Value::Object(prop));
    }

    json!({
        "name": descriptor.name,
        "description": descriptor.description,
        "parameters": {
            "type": "OBJECT",
            "properties": properties,
            "required": descriptor.required_params(),
        },
    })
}
