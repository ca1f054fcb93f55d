//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls to the leads service through the host's `/api`
//! proxy. Wire types live in the shared `leads` crate.

pub mod api;
