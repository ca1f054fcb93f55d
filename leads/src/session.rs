//! Session gate derived from a persisted token.
//!
//! DESIGN
//! ======
//! The token store is the single source of truth. `Session::refresh` re-derives
//! the state from it on every navigation, so there is no separately cached
//! "logged in" flag that could drift.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Two-state session machine. There is no token refresh and no intermediate
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated,
}

/// Something that moves the session between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    LoginSucceeded,
    LoggedOut,
    AccessDenied,
}

impl SessionState {
    /// State implied by the presence of a token. Empty tokens count as absent.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Authenticated,
            _ => Self::Anonymous,
        }
    }

    #[must_use]
    pub fn transition(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::LoginSucceeded => Self::Authenticated,
            SessionEvent::LoggedOut | SessionEvent::AccessDenied => Self::Anonymous,
        }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Persistence for the opaque session token.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn store(&mut self, token: &str);
    fn clear(&mut self);
}

/// Process-local token store.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn store(&mut self, token: &str) {
        self.token = Some(token.to_owned());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

/// Session state bound to a token store.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    state: SessionState,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        let state = SessionState::from_token(store.token().as_deref());
        Self { store, state }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Token to send as a bearer credential, if the session has one.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.token().filter(|token| !token.is_empty())
    }

    /// Re-read the store. Called on every navigation.
    pub fn refresh(&mut self) -> SessionState {
        self.state = SessionState::from_token(self.store.token().as_deref());
        self.state
    }

    pub fn login(&mut self, token: &str) -> SessionState {
        self.store.store(token);
        self.state = self.state.transition(SessionEvent::LoginSucceeded);
        self.state
    }

    pub fn logout(&mut self) -> SessionState {
        self.store.clear();
        self.state = self.state.transition(SessionEvent::LoggedOut);
        self.state
    }

    /// The server rejected the session.
    pub fn access_denied(&mut self) -> SessionState {
        self.store.clear();
        self.state = self.state.transition(SessionEvent::AccessDenied);
        self.state
    }

    /// Direct access to the backing store, e.g. to inspect persistence errors.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
