//! Conversation length guard
//!
//! Long sessions get a fixed nudge instead of another canned reply, unless the
//! user is saying thanks.

use super::rules::GRATITUDE_FRAGMENT;
use crate::conversation::History;

/// Prior messages allowed before the guard starts firing.
pub const LENGTH_GUARD_THRESHOLD: usize = 6;

pub const LENGTH_GUARD_REPLY: &str = "We've covered a lot! What else is on your mind?";

/// Returns the override reply when the session has run long.
///
/// `lowered` must already be lowercased.
pub fn length_guard(lowered: &str, history: &History) -> Option<&'static str> {
    if history.len() > LENGTH_GUARD_THRESHOLD && !lowered.contains(GRATITUDE_FRAGMENT) {
        Some(LENGTH_GUARD_REPLY)
    } else {
        None
    }
}
