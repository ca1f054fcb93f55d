//! Contact-form submission state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page collects name, email and message and posts them as a new
//! lead. Optional gating requires accepting the terms and passing a human
//! verification widget before anything is sent.
//!
//! Status moves `Idle -> Sending -> Success | Error`; a rejected local check
//! never leaves the current status and never reaches the network.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::future::Future;

use crate::error::ApiError;
use crate::lead::NewLead;

pub const MISSING_FIELDS_MESSAGE: &str = "Completa tu nombre, correo y mensaje.";
pub const TERMS_REQUIRED_MESSAGE: &str = "Debes aceptar los términos y condiciones.";
pub const VERIFICATION_REQUIRED_MESSAGE: &str = "Por favor completa la verificación.";
pub const SUCCESS_MESSAGE: &str = "¡Mensaje enviado con éxito! Gracias por contactarnos 😊";
pub const FAILURE_MESSAGE: &str = "Error al enviar, intenta nuevamente por favor 😞";

/// Text fields of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message].iter().all(|field| !field.trim().is_empty())
    }

    fn to_new_lead(&self) -> NewLead {
        NewLead {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Which extra checks the form enforces before submitting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactGating {
    pub require_terms: bool,
    /// Verification widget site key. No key means no verification step.
    pub site_key: Option<String>,
}

impl ContactGating {
    /// Gating with terms required and verification only when `site_key` is a
    /// non-empty string.
    #[must_use]
    pub fn new(require_terms: bool, site_key: Option<&str>) -> Self {
        Self {
            require_terms,
            site_key: site_key.map(str::trim).filter(|key| !key.is_empty()).map(str::to_owned),
        }
    }

    #[must_use]
    pub fn requires_verification(&self) -> bool {
        self.site_key.is_some()
    }
}

/// Submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Why a submission was refused locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactRejection {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,
    #[error("{}", TERMS_REQUIRED_MESSAGE)]
    TermsRequired,
    #[error("{}", VERIFICATION_REQUIRED_MESSAGE)]
    VerificationRequired,
}

/// Form values plus the submission state the landing page renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub accepted_terms: bool,
    /// Token handed over by the verification widget.
    pub verification_token: Option<String>,
    pub status: SubmitStatus,
    /// User-facing message for the result modal.
    pub notice: Option<String>,
}

impl ContactState {
    /// Run local checks and, if they pass, move to `Sending`.
    ///
    /// # Errors
    ///
    /// Returns the first failed check. The status is left unchanged and the
    /// rejection message is stored in `notice` (except for [`ContactRejection::InFlight`]).
    pub fn begin_submit(&mut self, gating: &ContactGating) -> Result<NewLead, ContactRejection> {
        if self.status == SubmitStatus::Sending {
            return Err(ContactRejection::InFlight);
        }
        let check = if !self.form.is_complete() {
            Err(ContactRejection::MissingFields)
        } else if gating.require_terms && !self.accepted_terms {
            Err(ContactRejection::TermsRequired)
        } else if gating.requires_verification()
            && self.verification_token.as_deref().is_none_or(str::is_empty)
        {
            Err(ContactRejection::VerificationRequired)
        } else {
            Ok(())
        };
        if let Err(rejection) = check {
            self.notice = Some(rejection.to_string());
            return Err(rejection);
        }
        self.status = SubmitStatus::Sending;
        self.notice = None;
        Ok(self.form.to_new_lead())
    }

    /// Apply the outcome of `POST /leads`.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        // Verification tokens are single use either way.
        self.verification_token = None;
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.form = ContactForm::default();
                self.accepted_terms = false;
                self.notice = Some(SUCCESS_MESSAGE.to_owned());
            }
            Err(_) => {
                self.status = SubmitStatus::Error;
                self.notice = Some(FAILURE_MESSAGE.to_owned());
            }
        }
    }

    /// Close the result modal.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }
}

/// Validate, send and record one submission attempt.
///
/// `send` is only invoked when the local checks pass. There is no retry.
pub async fn submit_contact<F, Fut>(state: &mut ContactState, gating: &ContactGating, send: F) -> SubmitStatus
where
    F: FnOnce(NewLead) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if let Ok(payload) = state.begin_submit(gating) {
        let result = send(payload).await;
        state.finish_submit(result);
    }
    state.status
}
