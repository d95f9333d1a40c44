use std::fmt;
use thiserror::Error;

/// Placeholder identifier handed to every simulated session
pub const PLACEHOLDER_USER_ID: &str = "user-123";
/// First assistant message of every session
pub const WELCOME_MESSAGE: &str = "Hola, soy NEXA AI. ¿En qué puedo ayudarte hoy?";
/// Fixed assistant answer to every user message
pub const CANNED_REPLY: &str = "He recibido tu mensaje. ¿En qué más puedo ayudarte?";
/// Transient error shown on the login screen after a failed sign-in
pub const SIGN_IN_ERROR: &str = "Error al iniciar sesión";

/// The screen currently in control of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Setup,
    Auth,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Upper-cased label used in transcripts
    pub fn tag(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Assistant => "ASSISTANT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// One chat turn. Fields are private so a message never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.role.tag(), self.content)
    }
}

/// The authenticated user context, alive only while the chat view is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl Session {
    /// Builds the simulated session for `email`.
    ///
    /// The display name is everything before the first `@`, or the whole
    /// string when there is none.
    pub fn for_email(email: &str) -> Self {
        let display_name = email.split('@').next().unwrap_or_default();
        Self {
            id: PLACEHOLDER_USER_ID.to_string(),
            email: email.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Raised when a transition is requested from a view that does not allow it
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot {action} from the {from:?} view")]
pub struct TransitionError {
    pub action: &'static str,
    pub from: ViewState,
}

/// Everything the controller mutates: current view, session and message log.
///
/// Every mutation goes through a transition method that checks the current
/// view, so a session exists exactly when the view is `Chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    view: ViewState,
    session: Option<Session>,
    messages: Vec<Message>,
    error: Option<String>,
    loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            view: ViewState::Setup,
            session: None,
            messages: Vec::new(),
            error: None,
            loading: false,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Error left behind by the last failed sign-in, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn expect_view(&self, expected: ViewState, action: &'static str) -> Result<(), TransitionError> {
        if self.view == expected {
            Ok(())
        } else {
            Err(TransitionError { action, from: self.view })
        }
    }

    /// SETUP -> AUTH
    pub fn open_login(&mut self) -> Result<(), TransitionError> {
        self.expect_view(ViewState::Setup, "open the login screen")?;
        self.view = ViewState::Auth;
        Ok(())
    }

    pub fn begin_sign_in(&mut self) -> Result<(), TransitionError> {
        self.expect_view(ViewState::Auth, "start a sign-in")?;
        self.loading = true;
        self.error = None;
        Ok(())
    }

    /// AUTH -> CHAT. Creates the session and greets the user.
    pub fn complete_sign_in(&mut self, email: &str) -> Result<&Session, TransitionError> {
        self.expect_view(ViewState::Auth, "complete a sign-in")?;
        self.loading = false;
        self.view = ViewState::Chat;
        self.messages.push(Message::new(Role::Assistant, WELCOME_MESSAGE));
        Ok(&*self.session.insert(Session::for_email(email)))
    }

    /// Records the failure and stays in AUTH.
    pub fn fail_sign_in(&mut self) -> Result<(), TransitionError> {
        self.expect_view(ViewState::Auth, "fail a sign-in")?;
        self.loading = false;
        self.error = Some(SIGN_IN_ERROR.to_string());
        Ok(())
    }

    pub fn push_user_message(&mut self, content: &str) -> Result<(), TransitionError> {
        self.expect_view(ViewState::Chat, "send a message")?;
        self.messages.push(Message::new(Role::User, content));
        Ok(())
    }

    pub fn push_reply(&mut self) -> Result<(), TransitionError> {
        self.expect_view(ViewState::Chat, "receive a reply")?;
        self.messages.push(Message::new(Role::Assistant, CANNED_REPLY));
        Ok(())
    }

    /// CHAT -> SETUP. Drops the session and the whole message log.
    pub fn sign_out(&mut self) -> Result<(), TransitionError> {
        self.expect_view(ViewState::Chat, "sign out")?;
        self.session = None;
        self.messages.clear();
        self.view = ViewState::Setup;
        Ok(())
    }
}
