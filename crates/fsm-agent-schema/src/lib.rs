//! Provider schema adapters for the fsm-agent framework
//!
//! Pure mappings from tool descriptors to the JSON structures each provider's
//! tool-calling API expects. All adapters are total over any descriptor
//! slice: an empty registry exports an empty tool list.

pub mod anthropic;
pub mod google;
pub mod openai;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use fsm_agent_core::ToolDescriptor;

/// Target provider format for a bulk schema export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFormat {
    /// `{type: "function", function: {...}}` entries (Chat Completions).
    OpenAi,
    /// `{name, description, input_schema}` entries (Messages API).
    Anthropic,
    /// A single `{function_declarations: [...]}` tool object (google-genai).
    Google,
}

impl SchemaFormat {
    pub fn export(&self, descriptors: &[ToolDescriptor]) -> Value {
        match self {
            SchemaFormat::OpenAi => Value::Array(openai::tools(descriptors)),
            SchemaFormat::Anthropic => Value::Array(anthropic::tools(descriptors)),
            SchemaFormat::Google => google::tool(descriptors),
        }
    }
}

impl FromStr for SchemaFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            "google" => Ok(Self::Google),
            _ => Err("unknown schema format"),
        }
    }
}
