//! Turn scheduler state machine
//!
//! Implements the Elm Architecture pattern: `transition` maps the current
//! state and an event to a new state plus effects for the runtime to carry out.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::TurnState;
pub use transition::{
    transition, typing_delay, TransitionError, TransitionResult, DELAY_MAX_UNITS, DELAY_MIN_UNITS,
    DELAY_UNITS_PER_CHAR,
};
