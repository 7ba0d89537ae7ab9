use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use fsm_agent_core::{Tool, ToolDescriptor};

use super::ToolError;

/// Name → tool mapping with deterministic, insertion-ordered export.
///
/// Names are unique; re-registering a name silently replaces the prior entry
/// (last registration wins) and keeps its original position in the export
/// order.
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
    order: RwLock<Vec<String>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
        }
    }

    /// Registers a tool and hands the same `Arc` back, so the tool remains
    /// directly callable by the application.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Arc<dyn Tool> {
        let name = tool.name().to_string();
        let mut tools = self.tools.write();
        if tools.insert(name.clone(), Arc::clone(&tool)).is_some() {
            tracing::warn!(tool = %name, "re-registering tool, previous entry replaced");
        } else {
            self.order.write().push(name);
        }
        tool
    }

    pub fn unregister(&self, name: &str) -> Result<(), ToolError> {
        let mut tools = self.tools.write();
        if tools.remove(name).is_none() {
            return Err(ToolError::NotFound(name.to_string()));
        }
        self.order.write().retain(|n| n != name);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().get(name).cloned()
    }

    /// Invokes the named tool. A failure inside the handler is wrapped in
    /// [`ToolError::Execution`]; the registry itself is unaffected and stays
    /// usable.
    pub fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        tool.call(args).map_err(|source| ToolError::Execution {
            tool: name.to_string(),
            source,
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.order.read().clone()
    }

    /// Descriptors for all registered tools, in insertion order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        let tools = self.tools.read();
        self.order
            .read()
            .iter()
            .filter_map(|name| tools.get(name))
            .map(|tool| tool.descriptor())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.read().is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionTool;
    use fsm_agent_core::{ParamSpec, ParamType};
    use serde_json::json;

    fn add_tool() -> Arc<dyn Tool> {
        Arc::new(
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
                .unwrap(),
        )
    }

    fn named_tool(name: &str, description: &str) -> Arc<dyn Tool> {
        Arc::new(
            FunctionTool::builder(name)
                .description(description)
                .handler(|_| Ok(Value::Null))
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_register_and_execute() {
        let registry = ToolRegistry::new();
        registry.register(add_tool());

        let result = registry.execute("add", json!({"x": 2, "y": 3})).unwrap();
        assert_eq!(result, json!(5));
    }

    #[test]
    fn test_registered_tool_stays_callable() {
        let registry = ToolRegistry::new();
        let tool = registry.register(add_tool());
        // direct invocation, bypassing the registry
        assert_eq!(tool.call(json!({"x": 1, "y": 1})).unwrap(), json!(2));
    }

    #[test]
    fn test_execute_missing_tool() {
        let registry = ToolRegistry::new();
        assert!(matches!(
            registry.execute("missing_tool", json!({})),
            Err(ToolError::NotFound(_))
        ));
    }

    #[test]
    fn test_execution_failure_is_wrapped() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(
            FunctionTool::builder("fail")
                .description("Always fails.")
                .handler(|_| anyhow::bail!("boom"))
                .build()
                .unwrap(),
        ));

        let err = registry.execute("fail", json!({})).unwrap_err();
        match err {
            ToolError::Execution { tool, source } => {
                assert_eq!(tool, "fail");
                assert!(source.to_string().contains("boom"));
            }
            other => panic!("expected Execution, got {:?}", other),
        }

        // the failure did not corrupt the registry
        assert_eq!(registry.len(), 1);
        assert!(registry.execute("fail", json!({})).is_err());
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = ToolRegistry::new();
        registry.register(named_tool("echo", "First version."));
        registry.register(Arc::new(
            FunctionTool::builder("echo")
                .description("Second version.")
                .handler(|args| Ok(args))
                .build()
                .unwrap(),
        ));

        assert_eq!(registry.len(), 1);
        let descs = registry.descriptors();
        assert_eq!(descs[0].description, "Second version.");
        assert_eq!(
            registry.execute("echo", json!({"k": 1})).unwrap(),
            json!({"k": 1})
        );
    }

    #[test]
    fn test_overwrite_keeps_insertion_slot() {
        let registry = ToolRegistry::new();
        registry.register(named_tool("a", "Tool a."));
        registry.register(named_tool("b", "Tool b."));
        registry.register(named_tool("a", "Tool a, revised."));

        assert_eq!(registry.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_unregister() {
        let registry = ToolRegistry::new();
        registry.register(named_tool("a", "Tool a."));
        registry.unregister("a").unwrap();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.unregister("a"),
            Err(ToolError::NotFound(_))
        ));
    }

    #[test]
    fn test_descriptors_round_trip() {
        let registry = ToolRegistry::new();
        registry.register(add_tool());

        let descs = registry.descriptors();
        assert_eq!(descs.len(), 1);
        assert_eq!(descs[0].name, "add");
        assert_eq!(descs[0].required_params(), vec!["x", "y"]);
    }

    #[test]
    fn test_descriptors_insertion_order() {
        let registry = ToolRegistry::new();
        registry.register(named_tool("research_web", "Researches a topic."));
        registry.register(named_tool("write_article", "Writes an article."));
        registry.register(named_tool("review_article", "Reviews the article."));

        let names: Vec<String> = registry.descriptors().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["research_web", "write_article", "review_article"]);
    }
}
