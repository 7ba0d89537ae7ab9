use std::fmt;

use serde_json::Value;

use fsm_agent_core::{ParamSpec, Tool};

use super::ToolError;

type Handler = Box<dyn Fn(Value) -> anyhow::Result<Value> + Send + Sync>;

/// A plain closure exposed as a [`Tool`]. This is the explicit-registration
/// counterpart of decorator-style registration: the handler stays directly
/// callable, and the parameter specs are declared up front instead of being
/// introspected at call time.
pub struct FunctionTool {
    name: String,
    description: String,
    params: Vec<ParamSpec>,
    handler: Handler,
}

impl FunctionTool {
    pub fn builder(name: impl Into<String>) -> FunctionToolBuilder {
        FunctionToolBuilder {
            name: name.into(),
            description: None,
            params: Vec::new(),
            handler: None,
        }
    }
}

impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        self.params.clone()
    }

    fn call(&self, args: Value) -> anyhow::Result<Value> {
        (self.handler)(args)
    }
}

impl fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

pub struct FunctionToolBuilder {
    name: String,
    description: Option<String>,
    params: Vec<ParamSpec>,
    handler: Option<Handler>,
}

impl FunctionToolBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    pub fn params(mut self, specs: Vec<ParamSpec>) -> Self {
        self.params = specs;
        self
    }

    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// A tool without a description is rejected: the description is what the
    /// model sees, so there is no useful fallback.
    pub fn build(self) -> Result<FunctionTool, ToolError> {
        let description = match self.description {
            Some(d) if !d.trim().is_empty() => d,
            _ => return Err(ToolError::MissingDescription(self.name)),
        };
        let handler = match self.handler {
            Some(h) => h,
            None => return Err(ToolError::MissingHandler(self.name)),
        };
        Ok(FunctionTool {
            name: self.name,
            description,
            params: self.params,
            handler,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsm_agent_core::ParamType;
    use serde_json::json;

    fn create_add_tool() -> FunctionTool {
        FunctionTool::builder("add")
            .description("Adds two integers.")
            .param(ParamSpec::required("x", ParamType::Integer))
            .param(ParamSpec::required("y", ParamType::Integer))
            .handler(|args| {
                let x = args["x"].as_i64().unwrap_or(0);
                let y = args["y"].as_i64().unwrap_or(0);
                Ok(json!(x + y))
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_and_call() {
        let tool = create_add_tool();
        assert_eq!(tool.name(), "add");
        let result = tool.call(json!({"x": 2, "y": 3})).unwrap();
        assert_eq!(result, json!(5));
    }

    #[test]
    fn test_descriptor() {
        let tool = create_add_tool();
        let desc = tool.descriptor();
        assert_eq!(desc.name, "add");
        assert_eq!(desc.description, "Adds two integers.");
        assert_eq!(desc.required_params(), vec!["x", "y"]);
    }

    #[test]
    fn test_missing_description_rejected() {
        let result = FunctionTool::builder("anon")
            .handler(|_| Ok(Value::Null))
            .build();
        assert!(matches!(result, Err(ToolError::MissingDescription(name)) if name == "anon"));
    }

    #[test]
    fn test_blank_description_rejected() {
        let result = FunctionTool::builder("anon")
            .description("   ")
            .handler(|_| Ok(Value::Null))
            .build();
        assert!(matches!(result, Err(ToolError::MissingDescription(_))));
    }

    #[test]
    fn test_missing_handler_rejected() {
        let result = FunctionTool::builder("anon")
            .description("Does nothing.")
            .build();
        assert!(matches!(result, Err(ToolError::MissingHandler(_))));
    }

    #[test]
    fn test_handler_error_propagates() {
        let tool = FunctionTool::builder("fail")
            .description("Always fails.")
            .handler(|_| anyhow::bail!("boom"))
            .build()
            .unwrap();
        let err = tool.call(json!({})).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
