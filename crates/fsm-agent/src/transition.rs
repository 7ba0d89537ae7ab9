use std::sync::Arc;

use serde_json::{Value, json};

use fsm_agent_core::{ParamSpec, ParamType, Tool};
use fsm_agent_state::StateMachine;

/// Synthetic tool that lets the model drive the state machine itself.
/// Registered after construction like any other tool; an unreachable target
/// surfaces as a failed tool execution for the orchestration loop to report
/// back to the model.
pub struct TransitionTool {
    machine: Arc<StateMachine>,
}

impl TransitionTool {
    pub const NAME: &'static str = "transition_state";

    pub fn new(machine: Arc<StateMachine>) -> Self {
        Self { machine }
    }
}

impl Tool for TransitionTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Transitions the agent to the next state."
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("next_state", ParamType::String)
                .with_description("State to move to; must be reachable from the current state."),
            ParamSpec::optional("reason", ParamType::String, json!(""))
                .with_description("Why the transition is being made."),
        ]
    }

    fn call(&self, args: Value) -> anyhow::Result<Value> {
        let next_state = args
            .get("next_state")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow::anyhow!("missing required argument 'next_state'"))?;
        let reason = args.get("reason").and_then(Value::as_str).unwrap_or("");

        let new_state = self.machine.transition(next_state)?;
        tracing::info!(to = %new_state, reason = %reason, "agent requested transition");

        Ok(Value::String(format!(
            "Successfully transitioned to {}",
            new_state
        )))
    }
}
