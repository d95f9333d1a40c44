use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::delay::{Delay, DelayError};
use super::state::{ChatState, Session, TransitionError};

#[derive(Debug, Error)]
pub enum SignInError {
    /// The simulated round trip failed; the state stays on the login screen
    #[error("sign-in request failed: {0}")]
    Network(#[from] DelayError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Simulated sign-in: waits out `latency`, then accepts any credentials.
///
/// The password is never checked or logged.
pub fn sign_in(
    state: &mut ChatState,
    delay: &dyn Delay,
    latency: Duration,
    email: &str,
    _password: &str,
) -> Result<Session, SignInError> {
    state.begin_sign_in()?;
    debug!("Signing in {} (simulated latency {:?})", email, latency);

    if let Err(e) = delay.pause(latency) {
        state.fail_sign_in()?;
        return Err(SignInError::Network(e));
    }

    let session = state.complete_sign_in(email)?.clone();
    info!("Signed in as {} ({})", session.display_name, session.id);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::state::{ViewState, SIGN_IN_ERROR, WELCOME_MESSAGE};
    use std::cell::RefCell;

    struct Recording(RefCell<Vec<Duration>>);

    impl Delay for Recording {
        fn pause(&self, duration: Duration) -> Result<(), DelayError> {
            self.0.borrow_mut().push(duration);
            Ok(())
        }
    }

    struct Unreachable;

    impl Delay for Unreachable {
        fn pause(&self, _duration: Duration) -> Result<(), DelayError> {
            Err(DelayError::Interrupted("connection reset".to_string()))
        }
    }

    fn at_login() -> ChatState {
        let mut state = ChatState::new();
        state.open_login().unwrap();
        state
    }

    #[test]
    fn any_credentials_are_accepted_after_the_latency() {
        let mut state = at_login();
        let delay = Recording(RefCell::new(Vec::new()));

        let session = sign_in(&mut state, &delay, Duration::from_millis(1500), "bob", "").unwrap();

        assert_eq!(session.display_name, "bob");
        assert_eq!(*delay.0.borrow(), vec![Duration::from_millis(1500)]);
        assert_eq!(state.view(), ViewState::Chat);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].content(), WELCOME_MESSAGE);
    }

    #[test]
    fn failed_wait_keeps_login_screen() {
        let mut state = at_login();

        let err = sign_in(&mut state, &Unreachable, Duration::ZERO, "a@b.c", "pw").unwrap_err();

        assert!(matches!(err, SignInError::Network(_)));
        assert_eq!(state.view(), ViewState::Auth);
        assert_eq!(state.error(), Some(SIGN_IN_ERROR));
        assert!(state.session().is_none());
        assert!(state.messages().is_empty());
    }

    #[test]
    fn outside_login_screen_is_a_transition_error() {
        let mut state = ChatState::new();
        let delay = Recording(RefCell::new(Vec::new()));

        let err = sign_in(&mut state, &delay, Duration::ZERO, "a@b.c", "pw").unwrap_err();

        assert!(matches!(err, SignInError::Transition(_)));
        assert!(delay.0.borrow().is_empty());
    }
}
