use chrono::Utc;
use parking_lot::RwLock;

use fsm_agent_core::{AgentError, Result, TransitionRecord};

use super::graph::TransitionGraph;

/// Wraps a [`TransitionGraph`] with a current-state cursor. The cursor is
/// always a key of the graph, and moves only through [`transition`].
///
/// One instance per independent agent run; callers sharing an instance
/// across threads must serialize their own control flow.
///
/// [`transition`]: StateMachine::transition
pub struct StateMachine {
    graph: TransitionGraph,
    current: RwLock<String>,
    previous: RwLock<Option<String>>,
    history: RwLock<Vec<TransitionRecord>>,
}

impl StateMachine {
    pub fn new(graph: TransitionGraph) -> Result<Self> {
        graph.validate()?;
        let initial = graph.initial_state.clone();
        Ok(Self {
            graph,
            current: RwLock::new(initial),
            previous: RwLock::new(None),
            history: RwLock::new(Vec::new()),
        })
    }

    pub fn current(&self) -> String {
        self.current.read().clone()
    }

    pub fn previous(&self) -> Option<String> {
        self.previous.read().clone()
    }

    /// States reachable from the current state, in the graph's declared
    /// order. An empty result is valid: the machine is either terminal or at
    /// a dead end.
    pub fn reachable(&self) -> Vec<String> {
        let current = self.current.read();
        // current is always a key of the graph
        self.graph
            .states
            .get(current.as_str())
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_terminal(&self) -> bool {
        self.graph.is_terminal(&self.current.read())
    }

    /// True when the current state has no outgoing transitions but is not
    /// terminal, so the driving loop can detect the stall.
    pub fn is_dead_end(&self) -> bool {
        !self.is_terminal() && self.reachable().is_empty()
    }

    /// Moves the cursor to `target` if it is reachable from the current
    /// state, returning the new state. On failure the cursor is unchanged.
    pub fn transition(&self, target: &str) -> Result<String> {
        let allowed = self.reachable();
        if !allowed.iter().any(|s| s == target) {
            return Err(AgentError::InvalidTransition {
                from: self.current(),
                to: target.to_string(),
                allowed,
            });
        }

        let from = {
            let mut current = self.current.write();
            let mut previous = self.previous.write();
            let from = current.clone();
            *previous = Some(from.clone());
            *current = target.to_string();
            from
        };

        self.history.write().push(TransitionRecord {
            from: from.clone(),
            to: target.to_string(),
            timestamp: Utc::now(),
        });
        tracing::debug!(from = %from, to = %target, "state transition");

        Ok(target.to_string())
    }

    pub fn history(&self) -> Vec<TransitionRecord> {
        self.history.read().clone()
    }

    /// Returns the machine to its initial state and clears the history.
    pub fn reset(&self) {
        *self.current.write() = self.graph.initial_state.clone();
        *self.previous.write() = None;
        self.history.write().clear();
    }

    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }
}
