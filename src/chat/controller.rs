use anyhow::Result;
use tracing::{debug, info, warn};

use super::auth::{self, SignInError};
use super::console::Console;
use super::delay::{Delay, Timings};
use super::display::{
    show_auth, show_chat, show_farewell, show_invalid_option, show_setup, show_signing_in,
    EMAIL_PROMPT, MESSAGE_PROMPT, OPTION_PROMPT, PASSWORD_PROMPT,
};
use super::state::{ChatState, ViewState};

/// Whether the control loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupOption {
    Login,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChatOption {
    Send,
    SignOut,
}

/// Menu choices are integers; anything else is rejected by the caller.
fn parse_choice(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

impl SetupOption {
    fn parse(input: &str) -> Option<Self> {
        match parse_choice(input)? {
            1 => Some(Self::Login),
            2 => Some(Self::Exit),
            _ => None,
        }
    }
}

impl ChatOption {
    fn parse(input: &str) -> Option<Self> {
        match parse_choice(input)? {
            1 => Some(Self::Send),
            2 => Some(Self::SignOut),
            _ => None,
        }
    }
}

/// Drives the SETUP -> AUTH -> CHAT screens over a [`Console`].
///
/// Each [`step`](Self::step) renders the current view, reads the input that
/// view accepts and applies at most one transition to the owned [`ChatState`].
pub struct ViewController<C: Console, D: Delay> {
    state: ChatState,
    console: C,
    delay: D,
    timings: Timings,
}

impl<C: Console, D: Delay> ViewController<C, D> {
    pub fn new(console: C, delay: D, timings: Timings) -> Self {
        Self {
            state: ChatState::new(),
            console,
            delay,
            timings,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Runs until the user picks "Salir" or input runs out.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting chat session");
        while self.step()? == Flow::Continue {}
        show_farewell(&mut self.console);
        info!("Chat session finished");
        Ok(())
    }

    pub fn step(&mut self) -> Result<Flow> {
        match self.state.view() {
            ViewState::Setup => self.setup_view(),
            ViewState::Auth => self.auth_view(),
            ViewState::Chat => self.chat_view(),
        }
    }

    fn setup_view(&mut self) -> Result<Flow> {
        show_setup(&mut self.console);
        let Some(input) = self.console.read_line(OPTION_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match SetupOption::parse(&input) {
            Some(SetupOption::Login) => {
                self.state.open_login()?;
                debug!("SETUP -> AUTH");
            }
            Some(SetupOption::Exit) => return Ok(Flow::Exit),
            None => {
                debug!("Rejected setup option {:?}", input);
                show_invalid_option(&mut self.console);
            }
        }
        Ok(Flow::Continue)
    }

    fn auth_view(&mut self) -> Result<Flow> {
        show_auth(&mut self.console, &self.state);
        let Some(email) = self.console.read_line(EMAIL_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(password) = self.console.read_line(PASSWORD_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        show_signing_in(&mut self.console);
        match auth::sign_in(&mut self.state, &self.delay, self.timings.sign_in, &email, &password) {
            Ok(_) => debug!("AUTH -> CHAT"),
            Err(SignInError::Network(e)) => warn!("Sign-in failed, staying on login screen: {}", e),
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn chat_view(&mut self) -> Result<Flow> {
        show_chat(&mut self.console, &self.state);
        let Some(input) = self.console.read_line(OPTION_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match ChatOption::parse(&input) {
            Some(ChatOption::Send) => {
                let Some(text) = self.console.read_line(MESSAGE_PROMPT)? else {
                    return Ok(Flow::Exit);
                };
                if !text.trim().is_empty() {
                    self.console.remember(&text);
                }
                self.state.push_user_message(&text)?;
                debug!("User message: {}", text);

                // The reply arrives even if the wait is cut short
                if let Err(e) = self.delay.pause(self.timings.reply) {
                    warn!("Reply wait interrupted: {}", e);
                }
                self.state.push_reply()?;
            }
            Some(ChatOption::SignOut) => {
                self.state.sign_out()?;
                info!("Signed out");
            }
            None => {
                debug!("Rejected chat option {:?}", input);
                show_invalid_option(&mut self.console);
            }
        }
        Ok(Flow::Continue)
    }
}
