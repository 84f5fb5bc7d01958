//! Property-based tests for the turn scheduler
//!
//! These drive random event sequences through `transition`, applying the
//! effects to a real history the way the runtime does.

use super::*;
use crate::conversation::{History, Sender};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z ?!]{1,40}",
        1 => Just(String::new()),
        1 => "[ \t\n]{1,5}",
        1 => Just("thanks!".to_string()),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_text().prop_map(|text| Event::UserSubmit { text }),
        Just(Event::DeliveryDue),
    ]
}

// ============================================================================
// Harness
// ============================================================================

struct Session {
    state: TurnState,
    history: History,
    timers: usize,
    accepted: usize,
    delivered: usize,
}

impl Session {
    fn new() -> Self {
        Self {
            state: TurnState::Idle,
            history: History::new(),
            timers: 0,
            accepted: 0,
            delivered: 0,
        }
    }

    fn apply(&mut self, event: Event, rng: &mut StdRng) -> Result<(), TransitionError> {
        let result = transition(&self.state, &self.history, event, rng)?;
        self.state = result.new_state;
        for effect in result.effects {
            match effect {
                Effect::AppendMessage { sender, text } => {
                    self.history.push(sender, text);
                }
                Effect::ScheduleDelivery { .. } => self.timers += 1,
                Effect::NotifyTyping { .. } => self.accepted += 1,
                Effect::NotifyIdle => {
                    self.delivered += 1;
                    self.timers -= 1;
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Never more than one outstanding timer, and it exists exactly while a reply is pending
    #[test]
    fn prop_single_reply_in_flight(
        events in proptest::collection::vec(arb_event(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new();
        for event in events {
            let _ = session.apply(event, &mut rng);
            prop_assert!(session.timers <= 1);
            prop_assert_eq!(session.timers == 1, session.state.is_pending());
        }
    }

    // History grows by exactly two messages per completed exchange
    #[test]
    fn prop_history_grows_two_per_exchange(
        events in proptest::collection::vec(arb_event(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new();
        for event in events {
            let _ = session.apply(event, &mut rng);
            let pending = usize::from(session.state.is_pending());
            prop_assert_eq!(session.history.len(), session.delivered * 2 + pending);
            prop_assert_eq!(session.accepted, session.delivered + pending);
        }
    }

    // Each companion reply lands directly after the user message that triggered it
    #[test]
    fn prop_senders_alternate(
        events in proptest::collection::vec(arb_event(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new();
        for event in events {
            let _ = session.apply(event, &mut rng);
        }
        for (i, msg) in session.history.iter().enumerate() {
            let expected = if i % 2 == 0 { Sender::User } else { Sender::Companion };
            prop_assert_eq!(msg.sender(), expected);
            prop_assert!(!msg.text().trim().is_empty());
        }
    }

    // Rejected events leave state and history untouched
    #[test]
    fn prop_rejection_is_a_no_op(
        events in proptest::collection::vec(arb_event(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new();
        for event in events {
            let state_before = session.state.clone();
            let len_before = session.history.len();
            if session.apply(event, &mut rng).is_err() {
                prop_assert_eq!(&session.state, &state_before);
                prop_assert_eq!(session.history.len(), len_before);
            }
        }
    }

    // The delay carried in the state always sits inside the clamp window
    #[test]
    fn prop_delay_within_bounds(text in "\\PC{0,200}") {
        let delay = typing_delay(&text);
        prop_assert!((DELAY_MIN_UNITS..=DELAY_MAX_UNITS).contains(&delay));
    }
}
