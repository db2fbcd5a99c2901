//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Network work goes through `actions`.

pub mod dashboard;
pub mod dashboard_event_detail;
pub mod dashboard_events;
pub mod event_detail;
pub mod events;
pub mod login;
pub mod registrations;
