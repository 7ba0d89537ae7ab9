//! OpenAI Chat Completions function-calling format.

use serde_json::{Value, json};

use fsm_agent_core::ToolDescriptor;

pub fn tools(descriptors: &[ToolDescriptor]) -> Vec<Value> {
    descriptors.iter().map(tool).collect()
}

pub fn tool(descriptor: &ToolDescriptor) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": descriptor.name,
            "description": descriptor.description,
            "parameters": descriptor.input_schema(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsm_agent_core::{ParamSpec, ParamType};

    #[test]
    fn test_function_shape() {
        let desc = ToolDescriptor::new(
            "add",
            "Adds two integers.",
            vec![
                ParamSpec::required("x", ParamType::Integer),
                ParamSpec::required("y", ParamType::Integer),
            ],
        );

        assert_eq!(
            tool(&desc),
            json!({
                "type": "function",
                "function": {
                    "name": "add",
                    "description": "Adds two integers.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "x": {"type": "integer"},
                            "y": {"type": "integer"},
                        },
                        "required": ["x", "y"],
                    },
                }
            })
        );
    }

    #[test]
    fn test_optional_param_excluded_from_required() {
        let desc = ToolDescriptor::new(
            "transition_state",
            "Transitions the agent to the next state.",
            vec![
                ParamSpec::required("next_state", ParamType::String),
                ParamSpec::optional("reason", ParamType::String, json!("")),
            ],
        );

        let exported = tool(&desc);
        assert_eq!(exported["function"]["parameters"]["required"], json!(["next_state"]));
    }

    #[test]
    fn test_empty_descriptor_list() {
        assert!(tools(&[]).is_empty());
    }
}
