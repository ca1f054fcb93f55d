//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the dashboard's building blocks while
//! reading shared state from Leptos context providers or props.

pub mod header;
pub mod lead_table;
pub mod modal;
pub mod pagination;
pub mod status_chart;
