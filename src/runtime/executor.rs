//! Conversation runtime executor

use super::traits::Clock;
use super::ChatEvent;
use crate::conversation::History;
use crate::state_machine::{transition, Effect, Event, TransitionError, TurnState};
use rand::Rng;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, RwLock};
use tokio::time::Sleep;

/// Event loop for one session. At most one delivery timer exists at a time.
pub struct ConversationRuntime<C, R>
where
    C: Clock,
    R: Rng + Send,
{
    state: TurnState,
    history: Arc<RwLock<History>>,
    clock: C,
    rng: R,
    /// Wall-clock length of one delay time unit
    time_unit: Duration,
    event_rx: mpsc::Receiver<Event>,
    broadcast_tx: broadcast::Sender<ChatEvent>,
    /// Timer for the pending reply, if any
    delivery: Option<Pin<Box<Sleep>>>,
}

impl<C, R> ConversationRuntime<C, R>
where
    C: Clock,
    R: Rng + Send,
{
    pub fn new(
        history: Arc<RwLock<History>>,
        clock: C,
        rng: R,
        time_unit: Duration,
        event_rx: mpsc::Receiver<Event>,
        broadcast_tx: broadcast::Sender<ChatEvent>,
    ) -> Self {
        Self {
            state: TurnState::Idle,
            history,
            clock,
            rng,
            time_unit,
            event_rx,
            broadcast_tx,
            delivery: None,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Starting conversation runtime");

        let mut accepting = true;
        loop {
            tokio::select! {
                received = self.event_rx.recv(), if accepting => {
                    match received {
                        Some(event) => self.process_event(event).await,
                        None => {
                            tracing::debug!(pending = self.delivery.is_some(), "Input closed");
                            accepting = false;
                        }
                    }
                }
                () = wait_for(&mut self.delivery), if self.delivery.is_some() => {
                    self.delivery = None;
                    self.process_event(Event::DeliveryDue).await;
                }
                else => break,
            }
        }

        tracing::info!("Conversation runtime stopped");
    }

    async fn process_event(&mut self, event: Event) {
        let result = {
            let history = self.history.read().await;
            transition(&self.state, &history, event, &mut self.rng)
        };

        let result = match result {
            Ok(r) => r,
            Err(TransitionError::EmptyUtterance) => {
                tracing::debug!("Ignoring blank submission");
                return;
            }
            Err(TransitionError::ReplyPending) => {
                tracing::info!("Reply pending, dropping submission");
                return;
            }
            Err(e @ TransitionError::InvalidTransition(_)) => {
                tracing::warn!(error = %e, state = ?self.state, "Unexpected event");
                return;
            }
        };

        self.state = result.new_state;
        for effect in result.effects {
            self.execute_effect(effect).await;
        }
    }

    async fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::AppendMessage { sender, text } => {
                let message = {
                    let mut history = self.history.write().await;
                    history.push_at(sender, text, self.clock.now_millis()).clone()
                };
                tracing::info!(sender = %message.sender(), id = message.id(), "Message appended");
                let _ = self.broadcast_tx.send(ChatEvent::Message { message });
            }

            Effect::ScheduleDelivery { delay } => {
                let wait = scaled_delay(self.time_unit, delay);
                tracing::debug!(delay_units = delay, wait = ?wait, "Scheduling reply");
                self.delivery = Some(Box::pin(tokio::time::sleep(wait)));
            }

            Effect::NotifyTyping { delay } => {
                let _ = self.broadcast_tx.send(ChatEvent::Typing { delay });
            }

            Effect::NotifyIdle => {
                let _ = self.broadcast_tx.send(ChatEvent::Idle);
            }
        }
    }
}

async fn wait_for(delivery: &mut Option<Pin<Box<Sleep>>>) {
    match delivery {
        Some(sleep) => sleep.as_mut().await,
        None => std::future::pending().await,
    }
}

fn scaled_delay(time_unit: Duration, units: u64) -> Duration {
    time_unit.saturating_mul(u32::try_from(units).unwrap_or(u32::MAX))
}
