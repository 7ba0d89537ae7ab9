//! Tool trait and the descriptor metadata derived from it

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Declared semantic type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamType {
    /// JSON Schema type name, as used by the OpenAI and Anthropic formats.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Array => "array",
            ParamType::Object => "object",
        }
    }

    /// Type name in the google-genai function-declaration convention.
    pub fn as_google_str(&self) -> &'static str {
        match self {
            ParamType::String => "STRING",
            ParamType::Integer => "INTEGER",
            ParamType::Number => "NUMBER",
            ParamType::Boolean => "BOOLEAN",
            ParamType::Array => "ARRAY",
            ParamType::Object => "OBJECT",
        }
    }

    pub fn from_schema_str(s: &str) -> Option<Self> {
        match s {
            "string" => Some(ParamType::String),
            "integer" => Some(ParamType::Integer),
            "number" => Some(ParamType::Number),
            "boolean" => Some(ParamType::Boolean),
            "array" => Some(ParamType::Array),
            "object" => Some(ParamType::Object),
            _ => None,
        }
    }
}

/// One formal parameter of a tool. A parameter is required exactly when it
/// carries no default value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ParamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamSpec {
    pub fn required(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, ty: ParamType, default: Value) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            default: Some(default),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Derived, read-only metadata for one registered tool. Recomputed whenever
/// the tool is re-registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        params: Vec<ParamSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params,
        }
    }

    /// Names of the parameters without a default, in declaration order.
    pub fn required_params(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.is_required())
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Canonical `{type: "object", properties, required}` JSON Schema for
    /// the parameter list. The provider adapters embed this shape.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.params {
            let mut prop = Map::new();
            prop.insert("type".into(), Value::String(param.ty.as_str().into()));
            if let Some(ref description) = param.description {
                prop.insert("description".into(), Value::String(description.clone()));
            }
            if let Some(ref default) = param.default {
                if !default.is_null() {
                    prop.insert("default".into(), default.clone());
                }
            }
            properties.insert(param.name.clone(), Value::Object(prop));
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_params(),
        })
    }
}

/// A callable exposed to a language model. Synchronous: a call blocks like a
/// plain function invocation, and long-running handlers are the caller's
/// responsibility.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters(&self) -> Vec<ParamSpec>;

    fn call(&self, args: Value) -> anyhow::Result<Value>;

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(self.name(), self.description(), self.parameters())
    }
}
