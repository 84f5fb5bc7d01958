//! Pure state transition function
//!
//! Given the same state, history, event and random source, `transition`
//! always produces the same result and performs no I/O.

use super::{Effect, Event, TurnState};
use crate::conversation::History;
use crate::responder::generate_response;
use rand::Rng;
use thiserror::Error;

/// Time units of "typing" per character of input
pub const DELAY_UNITS_PER_CHAR: u64 = 45;
pub const DELAY_MIN_UNITS: u64 = 800;
pub const DELAY_MAX_UNITS: u64 = 2400;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: TurnState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: TurnState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Nothing to send")]
    EmptyUtterance,
    #[error("Companion is still replying, message dropped")]
    ReplyPending,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Simulated typing time for an utterance, in time units.
pub fn typing_delay(utterance: &str) -> u64 {
    let len = u64::try_from(utterance.chars().count()).unwrap_or(u64::MAX);
    len.saturating_mul(DELAY_UNITS_PER_CHAR)
        .clamp(DELAY_MIN_UNITS, DELAY_MAX_UNITS)
}

/// Advance the turn scheduler.
///
/// `history` is the session as it stands before this event is applied. The
/// reply is chosen here, at submission time, and carried in the state until
/// delivery so later changes cannot alter it.
pub fn transition<R: Rng + ?Sized>(
    state: &TurnState,
    history: &History,
    event: Event,
    rng: &mut R,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // Idle + UserSubmit -> AwaitingReply
        (TurnState::Idle, Event::UserSubmit { text }) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(TransitionError::EmptyUtterance);
            }

            let reply = generate_response(text, history, rng);
            let delay = typing_delay(text);

            Ok(TransitionResult::new(TurnState::AwaitingReply { reply, delay })
                .with_effect(Effect::append_user_message(text))
                .with_effect(Effect::NotifyTyping { delay })
                .with_effect(Effect::ScheduleDelivery { delay }))
        }

        // Only one exchange may be in flight; extra submissions are dropped, not queued
        (TurnState::AwaitingReply { .. }, Event::UserSubmit { .. }) => {
            Err(TransitionError::ReplyPending)
        }

        // AwaitingReply + DeliveryDue -> Idle
        (TurnState::AwaitingReply { reply, .. }, Event::DeliveryDue) => {
            Ok(TransitionResult::new(TurnState::Idle)
                .with_effect(Effect::append_companion_message(reply.clone()))
                .with_effect(Effect::NotifyIdle))
        }

        (TurnState::Idle, Event::DeliveryDue) => Err(TransitionError::InvalidTransition(
            "delivery timer fired with no reply pending".to_string(),
        )),
    }
}
