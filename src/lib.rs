//! NEXA: a single-user terminal chat client with a simulated backend.
//!
//! Sign-in always succeeds after a fixed wait and the assistant answers every
//! message with the same line. The interesting part is the
//! [`chat::ViewController`] state machine driving the three screens.

pub mod chat;
pub mod config;
