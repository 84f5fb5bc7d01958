//! Companion chat - a scripted conversational responder
//!
//! Picks non-repeating canned replies from an ordered rule bank and delivers
//! them after a simulated typing delay, one exchange at a time.

pub mod config;
pub mod conversation;
pub mod responder;
pub mod runtime;
pub mod state_machine;
