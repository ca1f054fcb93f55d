//! Shared lead model and dashboard logic for the leads CRM.
//!
//! This crate owns the wire representation used by `client`, `leads-cli` and
//! the host server, plus every piece of derivation logic that does not touch
//! the network: filtering, pagination, status aggregation, the session state
//! machine and the contact-form state machine. Nothing here performs I/O.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod board;
pub mod contact;
pub mod error;
pub mod lead;
pub mod query;
pub mod session;
pub mod summary;

pub use board::LeadBoard;
pub use contact::{ContactForm, ContactGating, ContactRejection, ContactState, SubmitStatus};
pub use error::ApiError;
pub use lead::{Lead, LeadStatus, LoginRequest, LoginResponse, NewLead, StatusUpdate};
pub use query::{LeadPage, ListQuery, PAGE_SIZE, StatusFilter};
pub use session::{MemoryTokenStore, Session, SessionEvent, SessionState, TokenStore};
pub use summary::{ChartSlice, StatusCounts};

/// Decode a `GET /leads` response body.
///
/// The body must be a JSON array whose every element is a well-formed lead;
/// anything else is reported as [`ApiError::Malformed`] so callers treat it as
/// a load failure.
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] for invalid JSON, a non-array body, or an
/// element that does not decode as a [`Lead`].
pub fn decode_lead_collection(body: &str) -> Result<Vec<Lead>, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    decode_lead_value(value)
}

/// Same as [`decode_lead_collection`] for an already parsed JSON value.
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] when the value is not an array of leads.
pub fn decode_lead_value(value: serde_json::Value) -> Result<Vec<Lead>, ApiError> {
    if !value.is_array() {
        return Err(ApiError::Malformed("expected an array of leads".to_owned()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
}
