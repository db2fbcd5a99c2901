//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`events`, `dashboard`, `registrations`, `auth`,
//! `notification`) so pages depend on small focused models. Each container is
//! provided once as an `RwSignal` context and only mutated by its own actions.

pub mod auth;
pub mod dashboard;
pub mod detail;
pub mod events;
pub mod list;
pub mod notification;
pub mod params;
pub mod registrations;
