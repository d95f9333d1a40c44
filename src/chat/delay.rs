use std::time::Duration;
use thiserror::Error;

use crate::config::{DEFAULT_REPLY_MS, DEFAULT_SIGN_IN_MS};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DelayError {
    #[error("simulated network wait was interrupted: {0}")]
    Interrupted(String),
}

/// Stand-in for network latency.
///
/// The console client has no backend, so every "request" is a plain wait on
/// the only thread. Injecting it keeps the controller testable without
/// real sleeps.
pub trait Delay {
    fn pause(&self, duration: Duration) -> Result<(), DelayError>;
}

/// Blocks the current thread for the requested duration
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn pause(&self, duration: Duration) -> Result<(), DelayError> {
        std::thread::sleep(duration);
        Ok(())
    }
}

/// Latencies applied by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub sign_in: Duration,
    pub reply: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            sign_in: Duration::from_millis(DEFAULT_SIGN_IN_MS),
            reply: Duration::from_millis(DEFAULT_REPLY_MS),
        }
    }
}
