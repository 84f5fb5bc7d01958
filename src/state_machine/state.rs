//! Turn state

use serde::{Deserialize, Serialize};

/// Where the current exchange stands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnState {
    /// Ready for user input, no reply pending
    #[default]
    Idle,
    /// Companion is "typing"; the reply is fixed and waiting on its timer
    AwaitingReply {
        reply: String,
        /// Delay in time units before the reply is delivered
        delay: u64,
    },
}

impl TurnState {
    /// Whether a reply is in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, TurnState::AwaitingReply { .. })
    }
}
