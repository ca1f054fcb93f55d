//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` and read by the header (nav links), the dashboard
//! route guard and the access-denied modal. The stored token is the only
//! source of truth; every mutation goes through `leads::Session` over
//! [`BrowserTokens`] and then republishes the derived state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leads::{Session, SessionState};
use leptos::prelude::*;

use crate::util::storage::BrowserTokens;

/// Snapshot of the session as rendered by the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    pub state: SessionState,
    /// False until the token has been read in the browser. Server-rendered
    /// markup always sees an unchecked anonymous session.
    pub checked: bool,
}

/// Reactive handle to the session, cheap to copy into closures.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    pub view: RwSignal<SessionView>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self { view: RwSignal::new(SessionView::default()) }
    }

    fn publish(self, state: SessionState) {
        self.view.set(SessionView { state, checked: true });
    }

    /// Re-read the stored token. Called on every navigation.
    pub fn refresh(self) {
        let state = Session::new(BrowserTokens).refresh();
        self.publish(state);
    }

    pub fn login(self, token: &str) {
        let state = Session::new(BrowserTokens).login(token);
        self.publish(state);
    }

    pub fn logout(self) {
        let state = Session::new(BrowserTokens).logout();
        self.publish(state);
    }

    /// The server rejected the session; drop the token.
    pub fn access_denied(self) {
        let state = Session::new(BrowserTokens).access_denied();
        self.publish(state);
    }

    pub fn is_authenticated(self) -> bool {
        self.view.get().state.is_authenticated()
    }

    /// Bearer token for API calls.
    pub fn token(self) -> Option<String> {
        Session::new(BrowserTokens).token()
    }
}
