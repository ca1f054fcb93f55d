//! In-memory lead collection and its load/update state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard fetches the full collection once on mount and mutates it only
//! through single-lead status updates. `LeadBoard` applies the outcome of
//! those calls; the network itself lives in the callers (browser client, CLI).
//!
//! ERROR HANDLING
//! ==============
//! Access-denied is routed to `reauth_required`, never to `load_error`, so the
//! UI shows the re-login prompt instead of the generic failure notice.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::error::ApiError;
use crate::lead::{Lead, LeadStatus};
use crate::query::{LeadPage, ListQuery};
use crate::summary::StatusCounts;

/// Lead collection plus the flags the dashboard renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadBoard {
    pub leads: Vec<Lead>,
    pub loading: bool,
    /// Generic load failure notice.
    pub load_error: bool,
    /// The server rejected the session; the user must log in again.
    pub reauth_required: bool,
}

impl LeadBoard {
    /// Mark a fetch as started.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.load_error = false;
    }

    /// Apply the result of `GET /leads`.
    pub fn apply_fetch(&mut self, result: Result<Vec<Lead>, ApiError>) {
        self.loading = false;
        match result {
            Ok(leads) => self.leads = leads,
            Err(ApiError::AuthDenied) => self.reauth_required = true,
            Err(_) => {
                self.load_error = true;
                self.leads.clear();
            }
        }
    }

    /// Apply the result of `PATCH /leads/{id}`.
    ///
    /// On success the lead with `id` takes `status`; applying the same status
    /// twice leaves the same record. On failure the collection is untouched.
    ///
    /// # Errors
    ///
    /// Returns the call's error unchanged so the caller can report it.
    pub fn apply_status_update(
        &mut self,
        id: &str,
        status: LeadStatus,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                if let Some(lead) = self.leads.iter_mut().find(|lead| lead.id == id) {
                    lead.status = status;
                }
                Ok(())
            }
            Err(err) => {
                if err.is_auth_denied() {
                    self.reauth_required = true;
                }
                Err(err)
            }
        }
    }

    /// Acknowledge the re-login prompt.
    pub fn clear_reauth(&mut self) {
        self.reauth_required = false;
    }

    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_leads(&self.leads)
    }

    #[must_use]
    pub fn page<'a>(&'a self, query: &ListQuery) -> LeadPage<'a> {
        query.view(&self.leads)
    }

    /// Whether the list, summary and chart should render.
    #[must_use]
    pub fn ready(&self) -> bool {
        !self.loading && !self.load_error
    }
}
