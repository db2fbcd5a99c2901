//! Networking modules for the events REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! the failure taxonomy every caller handles.

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
