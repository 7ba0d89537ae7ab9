use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    /// Construction-time graph invariant violation. Fatal: the graph is
    /// unusable and was never built.
    #[error("Invalid transition graph: {0}")]
    InvalidGraph(String),

    /// A query referenced a state that is not defined in the graph.
    #[error("Unknown state '{0}'")]
    UnknownState(String),

    /// An attempted move to a state that is not reachable from the current
    /// one. The machine's cursor is left unchanged.
    #[error("Invalid transition: cannot move from '{from}' to '{to}'. Allowed transitions: {allowed:?}")]
    InvalidTransition {
        from: String,
        to: String,
        allowed: Vec<String>,
    },
}
