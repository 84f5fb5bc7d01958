//! Test doubles and helpers for runtime tests

use super::traits::Clock;
use super::ChatEvent;
use crate::config::ChatConfig;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::sync::broadcast;

/// Clock that advances by a fixed step on every reading
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
    step: i64,
}

impl ManualClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            now: AtomicI64::new(start),
            step,
        }
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.fetch_add(self.step, Ordering::SeqCst)
    }
}

/// Seeded config with real-sized delays (pair with paused tokio time)
pub fn test_config() -> ChatConfig {
    ChatConfig {
        time_unit: Duration::from_millis(1),
        seed: Some(7),
    }
}

/// Receive events up to and including the next `Idle`.
pub async fn collect_exchange(rx: &mut broadcast::Receiver<ChatEvent>) -> Vec<ChatEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.recv().await {
        let done = event == ChatEvent::Idle;
        events.push(event);
        if done {
            break;
        }
    }
    events
}
