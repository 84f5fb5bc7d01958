//! Reply selection with anti-repetition
//!
//! Prefers the first reply (in authored order) the companion has not said yet
//! in this session; once every reply has been used, picks one at random.

use crate::conversation::History;
use rand::seq::SliceRandom;
use rand::Rng;

/// Said when a rule somehow carries no replies.
pub const GENERIC_ACK: &str = "Mm-hmm, I'm listening.";

/// Pick a reply from `replies` given what the companion has already said.
pub fn select_reply<R: Rng + ?Sized>(
    replies: &'static [&'static str],
    history: &History,
    rng: &mut R,
) -> &'static str {
    let used = history.companion_texts();

    if let Some(&fresh) = replies.iter().find(|reply| !used.contains(**reply)) {
        return fresh;
    }

    tracing::debug!(candidates = replies.len(), "Reply set exhausted, reusing at random");
    replies.choose(rng).copied().unwrap_or(GENERIC_ACK)
}
