//! Conversation data model
//!
//! A session is an append-only `History` of immutable `Message`s.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Who authored a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Companion,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "you"),
            Sender::Companion => write!(f, "companion"),
        }
    }
}

/// A single chat message. Fields are private so a message cannot change once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    id: String,
    sender: Sender,
    text: String,
    /// Creation time in milliseconds since the Unix epoch
    timestamp: i64,
}

impl Message {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Ordered, append-only message log for one session
#[derive(Debug, Clone, Default, Serialize)]
pub struct History {
    messages: Vec<Message>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current wall-clock time.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &Message {
        self.push_at(sender, text, Utc::now().timestamp_millis())
    }

    /// Append a message with an explicit timestamp.
    ///
    /// Timestamps never go backwards: a clock that steps back is clamped to
    /// the previous message's time.
    pub fn push_at(&mut self, sender: Sender, text: impl Into<String>, timestamp: i64) -> &Message {
        let floor = self.messages.last().map_or(i64::MIN, Message::timestamp);
        let idx = self.messages.len();
        self.messages.push(Message {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp: timestamp.max(floor),
        });
        &self.messages[idx]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Texts of every companion message so far. Duplicates collapse.
    pub fn companion_texts(&self) -> HashSet<&str> {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::Companion)
            .map(Message::text)
            .collect()
    }
}
