//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionContext, SessionView};

/// Whether a guarded route should send the user to `/login`.
///
/// Waits until the token has been read on the client so server-rendered
/// markup never redirects.
pub fn should_redirect_unauth(view: &SessionView) -> bool {
    view.checked && !view.state.is_authenticated()
}

/// Redirect to `/login` whenever the session is known to be anonymous.
pub fn install_unauth_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.view.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
