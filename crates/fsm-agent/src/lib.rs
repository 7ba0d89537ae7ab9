//! State-constrained agent primitives.
//!
//! Two building blocks for LLM-driven agents steered by explicit state
//! constraints rather than free-form planning: a finite-state machine that
//! restricts which phases an agent may move between, and a tool registry
//! that exposes callables to a model together with the provider-specific
//! schema each API expects. The agent loop itself (model calls, conversation
//! history, retries) belongs to the calling application.
//!
//! ```
//! use std::sync::Arc;
//! use fsm_agent::state::{StateMachine, TransitionGraph};
//! use fsm_agent::tools::ToolRegistry;
//! use fsm_agent::{TransitionTool, generate_orchestrator_guide};
//!
//! let graph = TransitionGraph::new(
//!     [
//!         ("start", vec!["researching"]),
//!         ("researching", vec!["writing"]),
//!         ("writing", vec![]),
//!     ],
//!     "start",
//!     ["writing"],
//! )?;
//! let machine = Arc::new(StateMachine::new(graph)?);
//!
//! let registry = ToolRegistry::new();
//! registry.register(Arc::new(TransitionTool::new(Arc::clone(&machine))));
//!
//! let guide = generate_orchestrator_guide(&machine, &registry);
//! assert!(guide.contains("Current State: start"));
//! # Ok::<(), fsm_agent::error::AgentError>(())
//! ```

mod guide;
mod transition;

pub use guide::generate_orchestrator_guide;
pub use transition::TransitionTool;

pub mod error {
    pub use fsm_agent_core::{AgentError, Result};
    pub use fsm_agent_tools::ToolError;
}

pub mod state {
    pub use fsm_agent_core::TransitionRecord;
    pub use fsm_agent_state::{StateMachine, TransitionGraph};
}

pub mod tools {
    pub use fsm_agent_core::{ParamSpec, ParamType, Tool, ToolDescriptor};
    pub use fsm_agent_tools::{
        FunctionTool, FunctionToolBuilder, ToolRegistry, derive_params, generate_schema,
        params_from_schema,
    };
}

pub mod schema {
    pub use fsm_agent_schema::{SchemaFormat, anthropic, google, openai};
}
