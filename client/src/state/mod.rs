//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `dashboard`, `contact`). Each module
//! wraps a plain `leads` model in `RwSignal`s and owns the async glue that
//! feeds network results back into it.

pub mod contact;
pub mod dashboard;
pub mod session;
