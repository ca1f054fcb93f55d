//! Reactive contact-form state for the landing page.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leads::{ApiError, ContactGating, ContactState};
use leptos::prelude::*;

/// Contact form handle, cheap to copy into closures.
#[derive(Clone, Copy, Debug)]
pub struct ContactFormState {
    pub state: RwSignal<ContactState>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ContactState::default()) }
    }

    /// Validate locally and, when that passes, post the form.
    ///
    /// Rejected submissions only set the notice; no request is made.
    pub fn submit(self, gating: &ContactGating) {
        let mut begun = None;
        self.state.update(|s| begun = Some(s.begin_submit(gating)));
        let Some(Ok(payload)) = begun else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let gating = gating.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_lead(&payload).await;
                if let Err(err) = &result {
                    log::error!("failed to submit contact form: {err}");
                }
                self.finish(&gating, result, crate::util::verification::reset_widget);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    }

    /// Record the send outcome. The widget token was spent either way, so the
    /// widget is reset to issue a new one whenever verification is enabled.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn finish(self, gating: &ContactGating, result: Result<(), ApiError>, reset_widget: impl FnOnce()) {
        self.state.update(|s| s.finish_submit(result));
        if gating.requires_verification() {
            reset_widget();
        }
    }

    pub fn set_verification_token(self, token: Option<String>) {
        self.state.update(|s| s.verification_token = token);
    }

    pub fn dismiss_notice(self) {
        self.state.update(ContactState::dismiss_notice);
    }
}
