//! Typed outcome of a call to the leads service.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// HTTP status the leads service uses to reject a session.
pub const ACCESS_DENIED_STATUS: u16 = 403;

/// Failure of a leads-service call, classified so the UI can route it.
///
/// `AuthDenied` is never shown as a generic error: it drives the re-login
/// prompt and clears the stored token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the session (HTTP 403).
    #[error("access denied")]
    AuthDenied,
    /// Any other non-success HTTP status.
    #[error("server responded with status {status}")]
    Rejected { status: u16 },
    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Local validation failed; no request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if status == ACCESS_DENIED_STATUS {
            Self::AuthDenied
        } else {
            Self::Rejected { status }
        }
    }

    #[must_use]
    pub fn is_auth_denied(&self) -> bool {
        matches!(self, Self::AuthDenied)
    }

    /// Message shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthDenied => {
                "Tu sesión expiró o no tienes permiso para acceder. Por favor, inicia sesión nuevamente."
                    .to_owned()
            }
            Self::Validation(message) => message.clone(),
            Self::Rejected { .. } | Self::Transport(_) | Self::Malformed(_) => {
                "No se pudo completar la solicitud. Intenta nuevamente.".to_owned()
            }
        }
    }
}

/// Map an HTTP status to `Ok(())` for 2xx and the classified error otherwise.
///
/// # Errors
///
/// Returns [`ApiError::AuthDenied`] for 403 and [`ApiError::Rejected`] for any
/// other status outside `200..300`.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::from_status(status))
    }
}
