//! Runtime for a single chat session
//!
//! Owns the session history, feeds events through the turn scheduler and
//! carries out the resulting effects. The presentation layer talks to it
//! through a `RuntimeHandle` and listens for `ChatEvent`s.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::ConversationRuntime;
pub use traits::*;

use crate::config::ChatConfig;
use crate::conversation::{History, Message};
use crate::state_machine::Event;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, RwLock};
use tokio::task::JoinHandle;

const EVENT_CHANNEL_CAPACITY: usize = 32;
const BROADCAST_CAPACITY: usize = 64;

/// Events sent to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A message was appended to the history
    Message { message: Message },
    /// The companion started "typing" a reply
    Typing { delay: u64 },
    /// The exchange finished; input is accepted again
    Idle,
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Conversation runtime has stopped")]
    Stopped,
}

/// Handle to interact with a running session
#[derive(Clone)]
pub struct RuntimeHandle {
    event_tx: mpsc::Sender<Event>,
    broadcast_tx: broadcast::Sender<ChatEvent>,
    history: Arc<RwLock<History>>,
}

impl RuntimeHandle {
    /// Submit a line of user input. Blank lines and lines sent while a reply
    /// is pending are dropped by the runtime.
    pub async fn submit(&self, text: impl Into<String>) -> Result<(), RuntimeError> {
        self.event_tx
            .send(Event::user_submit(text))
            .await
            .map_err(|_| RuntimeError::Stopped)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.broadcast_tx.subscribe()
    }

    /// Snapshot of the history as it stands now
    pub async fn history(&self) -> History {
        self.history.read().await.clone()
    }
}

/// Start a session on the current tokio runtime.
///
/// The session task ends once every handle is dropped and any pending reply
/// has been delivered.
pub fn spawn_session<C: Clock + 'static>(
    config: &ChatConfig,
    clock: C,
) -> (RuntimeHandle, JoinHandle<()>) {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let (broadcast_tx, _) = broadcast::channel(BROADCAST_CAPACITY);
    let history = Arc::new(RwLock::new(History::new()));

    let runtime = ConversationRuntime::new(
        Arc::clone(&history),
        clock,
        rng,
        config.time_unit,
        event_rx,
        broadcast_tx.clone(),
    );
    let task = tokio::spawn(runtime.run());

    let handle = RuntimeHandle {
        event_tx,
        broadcast_tx,
        history,
    };
    (handle, task)
}
