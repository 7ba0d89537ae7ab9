use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed state transition, as recorded in the machine's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: String,
    pub to: String,
    pub timestamp: DateTime<Utc>,
}
