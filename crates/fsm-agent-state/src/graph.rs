use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use fsm_agent_core::{AgentError, Result};

/// A closed directed graph of named states. Each key of `states` is a valid
/// state; its value is the ordered sequence of states it may transition to.
/// Cycles are allowed, and terminal states may carry outgoing edges.
///
/// Immutable for the lifetime of the owning [`StateMachine`](crate::StateMachine).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionGraph {
    pub states: HashMap<String, Vec<String>>,
    pub initial_state: String,
    #[serde(default)]
    pub terminal_states: HashSet<String>,
}

impl TransitionGraph {
    /// Builds and validates a graph. Validation is atomic: on any invariant
    /// violation no graph is produced.
    pub fn new<S, T, I>(states: S, initial_state: impl Into<String>, terminal_states: I) -> Result<Self>
    where
        S: IntoIterator<Item = (T, Vec<T>)>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let graph = Self {
            states: states
                .into_iter()
                .map(|(state, targets)| {
                    (
                        state.into(),
                        targets.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
            initial_state: initial_state.into(),
            terminal_states: terminal_states.into_iter().map(Into::into).collect(),
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Checks the graph invariants: the initial state is defined, every
    /// transition target is defined, and every terminal state is defined.
    /// Deserialized graphs must pass through here before use.
    pub fn validate(&self) -> Result<()> {
        if !self.states.contains_key(&self.initial_state) {
            return Err(AgentError::InvalidGraph(format!(
                "initial state '{}' is not defined in states",
                self.initial_state
            )));
        }
        for (state, targets) in &self.states {
            for target in targets {
                if !self.states.contains_key(target) {
                    return Err(AgentError::InvalidGraph(format!(
                        "transition target '{}' from '{}' is not defined in states",
                        target, state
                    )));
                }
            }
        }
        for terminal in &self.terminal_states {
            if !self.states.contains_key(terminal) {
                return Err(AgentError::InvalidGraph(format!(
                    "terminal state '{}' is not defined in states",
                    terminal
                )));
            }
        }
        Ok(())
    }

    /// Ordered adjacency sequence for `state`.
    pub fn next_states(&self, state: &str) -> Result<&[String]> {
        self.states
            .get(state)
            .map(Vec::as_slice)
            .ok_or_else(|| AgentError::UnknownState(state.to_string()))
    }

    pub fn is_terminal(&self, state: &str) -> bool {
        self.terminal_states.contains(state)
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
