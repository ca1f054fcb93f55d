//! Reactive lead board and list query for the dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the in-memory collection and the page-local filter/search/page state.
//! Network completions are applied through `LeadBoard`; nothing coalesces or
//! cancels in-flight requests, so a slow earlier response can still land
//! after a newer one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leads::{ApiError, LeadBoard, LeadStatus, ListQuery, StatusFilter};
use leptos::prelude::*;

use super::session::SessionContext;

/// Dashboard state handle, cheap to copy into closures.
#[derive(Clone, Copy, Debug)]
pub struct DashboardState {
    pub board: RwSignal<LeadBoard>,
    pub query: RwSignal<ListQuery>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            board: RwSignal::new(LeadBoard { loading: true, ..LeadBoard::default() }),
            query: RwSignal::new(ListQuery::default()),
        }
    }

    pub fn set_filter(self, filter: StatusFilter) {
        self.query.update(|q| q.set_filter(filter));
    }

    pub fn set_search(self, search: String) {
        self.query.update(|q| q.set_search(search));
    }

    pub fn next_page(self) {
        let board = self.board.get_untracked();
        self.query.update(|q| q.next_page(&board.leads));
    }

    pub fn previous_page(self) {
        self.query.update(ListQuery::previous_page);
    }

    pub fn go_to(self, page: usize) {
        let board = self.board.get_untracked();
        self.query.update(|q| q.go_to(page, &board.leads));
    }

    /// Fetch the full collection, replacing whatever is loaded.
    pub fn load(self, session: SessionContext) {
        self.board.update(LeadBoard::begin_fetch);
        #[cfg(feature = "hydrate")]
        {
            let board = self.board;
            leptos::task::spawn_local(async move {
                let token = session.token();
                let result = crate::net::api::fetch_leads(token.as_deref()).await;
                if let Err(err) = &result {
                    if !err.is_auth_denied() {
                        log::error!("failed to load leads: {err}");
                    }
                }
                board.update(|b| b.apply_fetch(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    }

    /// Send a status change for one lead and apply it on success.
    pub fn set_status(self, session: SessionContext, id: String, status: LeadStatus) {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let token = session.token();
                let result = crate::net::api::update_lead_status(token.as_deref(), &id, status).await;
                if let Err(err) = self.apply_status_result(&id, status, result) {
                    log::error!("failed to update lead {id} to {status}: {err}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, id, status);
        }
    }

    /// Record a status-change outcome and keep the current page in range.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn apply_status_result(self, id: &str, status: LeadStatus, result: Result<(), ApiError>) -> Result<(), ApiError> {
        let mut outcome = Ok(());
        self.board.update(|b| outcome = b.apply_status_update(id, status, result));
        if outcome.is_ok() {
            let board = self.board.get_untracked();
            self.query.update(|q| q.settle(&board.leads));
        }
        outcome
    }

    /// Acknowledge the access-denied prompt: drop the token and the flag.
    pub fn acknowledge_access_denied(self, session: SessionContext) {
        session.access_denied();
        self.board.update(LeadBoard::clear_reauth);
    }
}
