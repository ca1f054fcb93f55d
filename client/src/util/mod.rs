//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (storage, verification widget callbacks), build-time config and
//! route guards used by pages.

pub mod auth;
pub mod config;
pub mod storage;
pub mod verification;
