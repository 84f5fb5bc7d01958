//! Effects produced by state transitions

use crate::conversation::Sender;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a message to the session history
    AppendMessage { sender: Sender, text: String },

    /// Start the single delivery timer
    ScheduleDelivery { delay: u64 },

    /// Tell the presentation layer the companion is typing
    NotifyTyping { delay: u64 },

    /// Tell the presentation layer the exchange is finished
    NotifyIdle,
}

impl Effect {
    pub fn append_user_message(text: impl Into<String>) -> Self {
        Effect::AppendMessage {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn append_companion_message(text: impl Into<String>) -> Self {
        Effect::AppendMessage {
            sender: Sender::Companion,
            text: text.into(),
        }
    }
}
