//! Scripted reply generation
//!
//! Maps an utterance plus the session history to a companion reply. Pure
//! apart from the injected random source, which is only consulted once a
//! rule's replies have all been used.

mod guard;
mod rules;
mod selector;


pub use guard::{length_guard, LENGTH_GUARD_REPLY, LENGTH_GUARD_THRESHOLD};
pub use rules::{match_rule, Matcher, Rule, GRATITUDE_FRAGMENT, RULES};
pub use selector::{select_reply, GENERIC_ACK};

use crate::conversation::History;
use rand::Rng;

/// Compute the companion's reply to `utterance`.
///
/// `history` holds the messages exchanged before this utterance and is only read.
pub fn generate_response<R: Rng + ?Sized>(utterance: &str, history: &History, rng: &mut R) -> String {
    let lowered = utterance.to_lowercase();

    if let Some(reply) = length_guard(&lowered, history) {
        tracing::debug!(history_len = history.len(), "Length guard fired");
        return reply.to_string();
    }

    let rule = match_rule(&lowered);
    let reply = select_reply(rule.replies, history, rng);
    tracing::debug!(rule = rule.name, reply, "Selected reply");
    reply.to_string()
}
