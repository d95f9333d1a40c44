// Screen data: view state, session and message log
pub mod state;

// Injected latency standing in for the network
pub mod delay;

// Simulated sign-in
pub mod auth;

// Terminal I/O seam
pub mod console;

// Screen rendering
pub mod display;

// The view-state loop
mod controller;

pub use auth::{sign_in, SignInError};
pub use console::{Console, LineEditor};
pub use controller::{Flow, ViewController};
pub use delay::{Delay, DelayError, ThreadSleep, Timings};
pub use state::{ChatState, Message, Role, Session, TransitionError, ViewState};
